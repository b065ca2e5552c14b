//! Raw parse tree produced by the grammar, before validation

/// A parsed `name(vars) = terms` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFunction {
    pub name: String,
    pub variables: Vec<String>,
    pub terms: Vec<Vec<RawLiteral>>,
}

/// One variable occurrence inside a product
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawLiteral {
    pub variable: char,
    /// The negation symbol written before the variable, if any
    pub inverter: Option<char>,
    /// Byte offset of the variable in the input
    pub position: usize,
}

impl RawLiteral {
    /// Split an identifier run such as `BC` into one literal per character
    ///
    /// Only the first character is negated by a preceding inverter, so
    /// `^BC` reads as `^B C`.
    pub fn split(start: usize, inverter: Option<char>, name: &str) -> Vec<RawLiteral> {
        let offset = start + inverter.map_or(0, char::len_utf8);
        name.char_indices()
            .map(|(i, variable)| RawLiteral {
                variable,
                inverter: if i == 0 { inverter } else { None },
                position: offset + i,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_negates_first_only() {
        let literals = RawLiteral::split(3, Some('^'), "BC");
        assert_eq!(
            literals,
            vec![
                RawLiteral {
                    variable: 'B',
                    inverter: Some('^'),
                    position: 4,
                },
                RawLiteral {
                    variable: 'C',
                    inverter: None,
                    position: 5,
                },
            ]
        );
    }
}
