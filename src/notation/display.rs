//! Rendering of terms, functions and tables in the function notation

use super::NotationConfig;
use crate::assignment::Assignments;
use crate::function::Function;
use crate::minimizer::GroupingTable;
use crate::term::{SizeMismatchError, Term, TriValue};
use std::fmt::Write as _;

impl NotationConfig {
    fn name_of(&self, index: usize) -> char {
        self.variable_name(index).unwrap_or('?')
    }

    /// Render a product such as `A^BC`
    ///
    /// The all-don't-care term renders as `1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use quine_mccluskey::{notation::NotationConfig, Term};
    ///
    /// let t = Term::from_cube(&[Some(true), Some(false), None]);
    /// assert_eq!(NotationConfig::default().render_term(&t), "A^B");
    /// ```
    pub fn render_term(&self, term: &Term) -> String {
        let mut out = String::new();
        for (i, value) in term.values().iter().enumerate() {
            match value {
                TriValue::True => out.push(self.name_of(i)),
                TriValue::False => {
                    out.push(self.inverter);
                    out.push(self.name_of(i));
                }
                TriValue::DontCare => {}
            }
        }
        if out.is_empty() {
            out.push('1');
        }
        out
    }

    /// Render a sum such as `A + ^BC`, or `0` when empty
    pub fn render_function(&self, function: &Function) -> String {
        if function.is_empty() {
            return "0".to_string();
        }
        function
            .iter()
            .map(|t| self.render_term(t))
            .collect::<Vec<_>>()
            .join(" + ")
    }

    /// Render `name(A,B,...)` for `width` variables
    pub fn render_declaration(&self, name: &str, width: usize) -> String {
        let variables: Vec<String> = (0..width).map(|i| self.name_of(i).to_string()).collect();
        format!("{}({})", name, variables.join(","))
    }

    /// Render a full equation such as `f(A,B) = A + B`
    pub fn render_equation(&self, name: &str, width: usize, function: &Function) -> String {
        format!(
            "{} = {}",
            self.render_declaration(name, width),
            self.render_function(function)
        )
    }

    /// Render the truth table of `function` over `width` variables
    ///
    /// ```text
    /// AB | f()
    /// ---|--
    /// 00 |  0
    /// 01 |  1
    /// ```
    pub fn render_truth_table(
        &self,
        function: &Function,
        width: usize,
    ) -> Result<String, SizeMismatchError> {
        let outputs = function.truth_table(width)?;
        let mut out = String::new();
        for i in 0..width {
            out.push(self.name_of(i));
        }
        out.push_str(" | f()\n");
        for i in 0..width + 6 {
            out.push(if i == width + 1 { '|' } else { '-' });
        }
        out.push('\n');
        for (arg, value) in Assignments::all(width).zip(outputs) {
            let _ = writeln!(out, "{} |  {}", arg, u8::from(value));
        }
        Ok(out)
    }

    /// Render every level of a grouping table
    ///
    /// Terms are listed per bucket in bit-string form; a trailing `*` marks
    /// terms consumed by a merge.
    pub fn render_table(&self, table: &GroupingTable) -> String {
        let mut out = String::new();
        for level in 0..table.level_count() {
            let _ = writeln!(out, "level {}:", level);
            for bucket in 0..table.bucket_count(level) {
                let terms: Vec<String> = table
                    .bucket_with_marks(level, bucket)
                    .map(|(t, used)| format!("{}{}", t, if used { "*" } else { "" }))
                    .collect();
                let _ = writeln!(out, "  true_count = {}: {}", bucket, terms.join(" "));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn term(cube: &[Option<bool>]) -> Term {
        Term::from_cube(cube)
    }

    #[test]
    fn test_render_term() {
        let config = NotationConfig::default();
        assert_eq!(config.render_term(&term(&[Some(true), None, Some(false)])), "A^C");
        assert_eq!(config.render_term(&term(&[None, None])), "1");

        let custom = NotationConfig {
            inverter: '~',
            first_variable: 'a',
        };
        assert_eq!(custom.render_term(&term(&[Some(false), Some(true)])), "~ab");
    }

    #[test]
    fn test_render_function() {
        let config = NotationConfig::default();
        let f = Function::from_terms([term(&[Some(true), None]), term(&[None, Some(true)])]).unwrap();
        assert_eq!(config.render_function(&f), "A + B");
        assert_eq!(config.render_function(&Function::new()), "0");
        assert_eq!(config.render_equation("f", 2, &f), "f(A,B) = A + B");
    }

    #[test]
    fn test_render_truth_table() {
        let config = NotationConfig::default();
        let f = Function::from(term(&[Some(true), Some(true)]));
        let table = config.render_truth_table(&f, 2).unwrap();
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "AB | f()");
        assert_eq!(lines[1], "---|----");
        assert_eq!(lines[2], "00 |  0");
        assert_eq!(lines[5], "11 |  1");
        assert_eq!(lines.len(), 6);

        assert!(config.render_truth_table(&f, 3).is_err());
    }

    #[test]
    fn test_render_table_marks_consumed() {
        let config = NotationConfig::default();
        let minterms = Function::from_terms([
            term(&[Some(true), Some(false)]),
            term(&[Some(true), Some(true)]),
        ])
        .unwrap();
        let mut table = GroupingTable::from_minterms(2, &minterms).unwrap();
        table.compress_once().unwrap();

        let out = config.render_table(&table);
        assert!(out.contains("level 0:"));
        assert!(out.contains("true_count = 1: 10*"));
        assert!(out.contains("true_count = 2: 11*"));
        assert!(out.contains("level 1:"));
        assert!(out.contains("true_count = 1: 1x\n"));
    }
}
