use serde::{Deserialize, Serialize};

/// The ordered natural numbers 1..=N. Element at 0-based index i equals i+1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sequence {
    pub values: Vec<u64>,
}

impl Sequence {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Arithmetic total of all elements.
    pub fn sum(&self) -> u64 {
        self.values.iter().sum()
    }
}

/// The three rendered views of a sequence, kept as a value so formatting
/// can be checked without capturing stdout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDocument {
    pub count: u64,
    pub sequence_line: String,
    pub enumerated_lines: Vec<String>,
    pub sum_line: String,
}

impl ReportDocument {
    /// Assembles the exact text the reporter writes: header and bracketed
    /// list, a blank line, the enumerated listing, a blank line, the sum.
    pub fn render(&self) -> String {
        let mut lines = Vec::with_capacity(self.enumerated_lines.len() + 6);
        lines.push(format!("The first {} natural numbers are:", self.count));
        lines.push(self.sequence_line.clone());
        lines.push(String::new());
        lines.push("Formatted output:".to_string());
        lines.extend(self.enumerated_lines.iter().cloned());
        lines.push(String::new());
        lines.push(self.sum_line.clone());

        let mut text = lines.join("\n");
        text.push('\n');
        text
    }
}
