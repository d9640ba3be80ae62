use std::fmt;

/// One reduced beat window, written as `{denominator}p0,p1,...,` plus a line break.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowRecord {
    pub denominator: usize,
    pub phrases: Vec<String>,
}

impl WindowRecord {
    pub fn new(denominator: usize, phrases: Vec<String>) -> Self {
        Self {
            denominator,
            phrases,
        }
    }
}

impl fmt::Display for WindowRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.denominator)?;
        for phrase in &self.phrases {
            write!(f, "{},", phrase)?;
        }
        writeln!(f)
    }
}
