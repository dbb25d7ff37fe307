//! Character grid the view draws into
use std::fmt;

/// A fixed-size surface of character cells addressed by `(column, row)`
pub trait Grid {
    fn get_width(&self) -> u16;

    fn get_height(&self) -> u16;

    /// Writes outside the grid are ignored
    fn set_cell(&mut self, x: u16, y: u16, value: char);

    /// Reads outside the grid return a space
    fn get_cell(&self, x: u16, y: u16) -> char;

    /// Write `text` starting at `(x, y)`, clipped at the right edge
    fn put_str(&mut self, x: u16, y: u16, text: &str) {
        if y >= self.get_height() {
            return;
        }
        let width = self.get_width();
        for (column, c) in (x..width).zip(text.chars()) {
            self.set_cell(column, y, c);
        }
    }
}

/// Owned grid of characters, initially blank
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharBuffer {
    width: u16,
    height: u16,
    cells: Vec<char>,
}

impl CharBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height, cells: vec![' '; usize::from(width) * usize::from(height)] }
    }

    /// Rows as strings, trailing spaces kept
    pub fn lines(&self) -> Vec<String> {
        if self.width == 0 {
            return vec![String::new(); usize::from(self.height)];
        }
        self.cells.chunks(usize::from(self.width)).map(|row| row.iter().collect()).collect()
    }

    fn offset(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| usize::from(y) * usize::from(self.width) + usize::from(x))
    }
}

impl Grid for CharBuffer {
    fn get_width(&self) -> u16 {
        self.width
    }

    fn get_height(&self) -> u16 {
        self.height
    }

    fn set_cell(&mut self, x: u16, y: u16, value: char) {
        if let Some(offset) = self.offset(x, y) {
            self.cells[offset] = value;
        }
    }

    fn get_cell(&self, x: u16, y: u16) -> char {
        self.offset(x, y).map_or(' ', |offset| self.cells[offset])
    }
}

impl fmt::Display for CharBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_access() {
        let mut buffer = CharBuffer::new(4, 2);
        buffer.set_cell(4, 0, 'a');
        buffer.set_cell(0, 2, 'b');
        assert_eq!(buffer.get_cell(4, 0), ' ');
        assert_eq!(buffer.get_cell(0, 7), ' ');
        assert_eq!(buffer.lines(), vec!["    ", "    "]);
    }

    #[test]
    fn test_put_str_clips() {
        let mut buffer = CharBuffer::new(5, 2);
        buffer.put_str(2, 1, "hello");
        buffer.put_str(0, 9, "nope");
        assert_eq!(buffer.lines(), vec!["     ", "  hel"]);
        assert_eq!(buffer.get_cell(4, 1), 'l');
        assert_eq!(buffer.to_string(), "\n  hel\n");
    }

    #[test]
    fn test_zero_width() {
        let mut buffer = CharBuffer::new(0, 2);
        buffer.put_str(0, 0, "x");
        assert_eq!(buffer.lines(), vec!["", ""]);
    }
}
