//! Text layout of the view
//!
//! ```text
//! row 0       Timestamp: <cursor>
//! row 1       <timestamp index>
//! row 2       --Registers-------------------------------------
//! rows 3..11  four columns of eight registers, 32 cells apart
//! row 11      --Instructions----------------------------------
//! rows 12..   one word per row, the program counter marked with '>'
//! ```
use riscv::registers::{abi_name, x_name, REGS_IN_MAIN};

use crate::{
    buffer::Grid,
    state::{MachineSnapshot, RegisterSnapshot, WindowEntry},
};

pub const REGISTERS_HEADER_ROW: u16 = 2;
pub const INSTRUCTIONS_HEADER_ROW: u16 = 11;

const REGISTERS_PER_COLUMN: usize = 8;
const REGISTER_COLUMN_WIDTH: usize = 32;

/// Draw `snapshot` into `grid` and hand the grid back. Anything past the
/// grid edges is dropped.
pub fn render<G: Grid>(mut grid: G, snapshot: &MachineSnapshot, cursor: u64) -> G {
    draw(&mut grid, snapshot, cursor);
    grid
}

fn draw<G: Grid>(grid: &mut G, snapshot: &MachineSnapshot, cursor: u64) {
    grid.put_str(0, 0, &format!("Timestamp: {cursor}"));
    grid.put_str(0, 1, &snapshot.timestamp_index.to_string());

    section_header(grid, REGISTERS_HEADER_ROW, "Registers");
    for (index, register) in snapshot.registers.iter().enumerate() {
        let (column, row) = register_cell(index);
        grid.put_str(column, row, &register_line(index as u8, register));
    }

    section_header(grid, INSTRUCTIONS_HEADER_ROW, "Instructions");
    let center = i64::from(INSTRUCTIONS_HEADER_ROW) + 1 + i64::from(snapshot.window_radius);
    for entry in &snapshot.window {
        if let Ok(row) = u16::try_from(center + entry.offset) {
            grid.put_str(0, row, &instruction_line(entry));
        }
    }
}

/// Top-left cell of register `index` in the register panel
pub fn register_cell(index: usize) -> (u16, u16) {
    let column = (index % REGS_IN_MAIN) / REGISTERS_PER_COLUMN * REGISTER_COLUMN_WIDTH;
    let row = usize::from(REGISTERS_HEADER_ROW) + 1 + index % REGISTERS_PER_COLUMN;
    (column as u16, row as u16)
}

pub fn register_line(index: u8, register: &RegisterSnapshot) -> String {
    format!(
        "{:<3} ({:<4}) 0x{:08x} ({})",
        x_name(index),
        abi_name(index),
        register.value,
        register.hazard
    )
}

pub fn instruction_line(entry: &WindowEntry) -> String {
    let marker = if entry.offset == 0 { '>' } else { '-' };
    format!("{}{:08x} ({:08x}) {}", marker, entry.address, entry.word, entry.text())
}

/// Full-width dashes with `--<title>` over the left end
fn section_header<G: Grid + ?Sized>(grid: &mut G, row: u16, title: &str) {
    for column in 0..grid.get_width() {
        grid.set_cell(column, row, '-');
    }
    grid.put_str(0, row, &format!("--{title}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::CharBuffer;
    use riscv::{decode, Target};

    fn snapshot(pc: u32, words: &[(i64, u32)]) -> MachineSnapshot {
        let mut registers = [RegisterSnapshot::default(); REGS_IN_MAIN];
        registers[9] = RegisterSnapshot { value: 0xdead_beef, hazard: 3 };
        let window = words
            .iter()
            .map(|(offset, word)| WindowEntry {
                offset: *offset,
                address: (i64::from(pc) + offset) as u64,
                word: *word,
                instruction: decode(*word, &Target::rv32i()),
            })
            .collect();
        MachineSnapshot {
            timestamp_index: 5,
            program_counter: pc,
            registers,
            window_radius: 3,
            window,
        }
    }

    #[test]
    fn test_register_cells() {
        assert_eq!(register_cell(0), (0, 3));
        assert_eq!(register_cell(7), (0, 10));
        assert_eq!(register_cell(9), (32, 4));
        assert_eq!(register_cell(31), (96, 10));
    }

    #[test]
    fn test_register_line() {
        let line = register_line(9, &RegisterSnapshot { value: 0xdead_beef, hazard: 3 });
        assert_eq!(line, "x9  (s1  ) 0xdeadbeef (3)");
        let line = register_line(0, &RegisterSnapshot::default());
        assert_eq!(line, "x0  (zero) 0x00000000 (0)");
    }

    #[test]
    fn test_render_layout() {
        let snapshot = snapshot(4, &[(-1, 0x13), (0, 0x00a00093), (1, 0xffff_ffff)]);
        let buffer = render(CharBuffer::new(128, 19), &snapshot, 55);
        let lines = buffer.lines();

        assert_eq!(lines[0].trim_end(), "Timestamp: 55");
        assert_eq!(lines[1].trim_end(), "5");
        assert!(lines[2].starts_with("--Registers---"));
        assert_eq!(lines[2].len(), 128);
        assert_eq!(&lines[4][32..57], "x9  (s1  ) 0xdeadbeef (3)");
        assert!(lines[11].starts_with("--Instructions---"));
        assert_eq!(lines[12].trim_end(), "");
        assert_eq!(lines[14].trim_end(), "-00000003 (00000013) addi zero, zero, 0");
        assert_eq!(lines[15].trim_end(), ">00000004 (00a00093) addi ra, zero, 10");
        assert_eq!(lines[16].trim_end(), "-00000005 (ffffffff) <unknown>");
        assert_eq!(lines[18].trim_end(), "");
    }

    #[test]
    fn test_render_clips_to_small_grid() {
        let snapshot = snapshot(4, &[(0, 0x13), (3, 0x13)]);
        let buffer = render(CharBuffer::new(20, 16), &snapshot, 0);
        let lines = buffer.lines();
        assert_eq!(lines.len(), 16);
        assert_eq!(lines[2], "--Registers---------");
        assert_eq!(lines[11], "--Instructions------");
        assert_eq!(lines[15], ">00000004 (00000013)");
        assert_eq!(buffer.get_cell(0, 3), 'x');
    }
}
