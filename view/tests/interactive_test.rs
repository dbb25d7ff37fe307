use gecko_view::{
    interactive, BitVector, CharBuffer, GeckoView, MemoryHeader, MemoryWaveform, Plugin,
    SignalPaths, Trace, VcdHeader, ViewConfig, ViewError,
};

/// Waveform of a core sampled at times 0, 10, .., 60
struct Core {
    header: MemoryHeader,
    waveform: MemoryWaveform,
    paths: SignalPaths,
}

impl Core {
    fn new(pc: u64, memory: &[(u64, u32)]) -> Self {
        let mut core =
            Self { header: MemoryHeader::new(), waveform: MemoryWaveform::new(), paths: SignalPaths::default() };
        for i in 0..32u8 {
            core.set(&core.paths.register_value(i), 32, 0, 0);
            core.set(&core.paths.hazard_front(i), 3, 0, 0);
            core.set(&core.paths.hazard_rear(i), 3, 0, 0);
        }
        core.set(&core.paths.program_counter(), 32, 0, pc);
        for (address, word) in memory {
            core.set(&core.paths.memory_word(*address), 32, 0, u64::from(*word));
        }
        for time in (0..=60).step_by(10) {
            core.set("TOP.clk", 1, time, time / 10 % 2);
        }
        core
    }

    fn set(&mut self, path: &str, width: usize, time: u64, value: u64) {
        let idcode = match self.header.get_variable(path) {
            Some(variable) => variable.idcode(),
            None => {
                let idcode = self.waveform.add_signal();
                self.header.add_variable(path, idcode, width);
                idcode
            }
        };
        self.waveform.insert_vector(idcode, time, BitVector::from_u64(value, width));
    }

    fn render(&self, cursor: u64) -> Result<Vec<String>, ViewError> {
        let buffer = interactive(CharBuffer::new(128, 19), &self.waveform, &self.header, cursor)?;
        Ok(buffer.lines().into_iter().map(|line| line.trim_end().to_string()).collect())
    }
}

fn nops(range: std::ops::Range<u64>) -> Vec<(u64, u32)> {
    range.map(|address| (address, 0x0000_0013)).collect()
}

#[test]
fn test_hazard_depth_in_register_panel() {
    let mut core = Core::new(8, &nops(0..16));
    let (front, rear) = (core.paths.hazard_front(9), core.paths.hazard_rear(9));
    core.set(&front, 3, 20, 1);
    core.set(&rear, 3, 20, 6);
    let value = core.paths.register_value(9);
    core.set(&value, 32, 20, 0x1234);

    let lines = core.render(25).unwrap();
    assert_eq!(&lines[4][32..57], "x9  (s1  ) 0x00001234 (3)");
    assert_eq!(&lines[3][..25], "x0  (zero) 0x00000000 (0)");

    let lines = core.render(15).unwrap();
    assert_eq!(&lines[4][32..57], "x9  (s1  ) 0x00000000 (0)");
}

#[test]
fn test_header_rows_use_nearest_before() {
    let core = Core::new(8, &nops(0..16));
    let lines = core.render(55).unwrap();
    assert_eq!(lines[0], "Timestamp: 55");
    assert_eq!(lines[1], "5");
    assert!(lines[2].starts_with("--Registers--"));
    assert!(lines[11].starts_with("--Instructions--"));
}

#[test]
fn test_instruction_window_markers() {
    let core = Core::new(8, &nops(0..16));
    let lines = core.render(0).unwrap();
    let window: Vec<&str> = lines[12..19].iter().map(String::as_str).collect();
    assert_eq!(
        window,
        vec![
            "-00000005 (00000013) addi zero, zero, 0",
            "-00000006 (00000013) addi zero, zero, 0",
            "-00000007 (00000013) addi zero, zero, 0",
            ">00000008 (00000013) addi zero, zero, 0",
            "-00000009 (00000013) addi zero, zero, 0",
            "-0000000a (00000013) addi zero, zero, 0",
            "-0000000b (00000013) addi zero, zero, 0",
        ]
    );
}

#[test]
fn test_low_pc_skips_negative_addresses() {
    // Nothing is recorded below address 0, so a lookup there would abort
    let core = Core::new(1, &nops(0..5));
    let lines = core.render(0).unwrap();
    assert_eq!(lines[12], "");
    assert_eq!(lines[13], "");
    assert_eq!(lines[14], "-00000000 (00000013) addi zero, zero, 0");
    assert_eq!(lines[15], ">00000001 (00000013) addi zero, zero, 0");
    assert_eq!(lines[18], "-00000004 (00000013) addi zero, zero, 0");
}

#[test]
fn test_undecodable_word_renders_unknown() {
    let mut memory = nops(0..16);
    memory[9] = (9, 0xffff_ffff);
    memory[10] = (10, 0);
    let core = Core::new(8, &memory);
    let lines = core.render(0).unwrap();
    assert_eq!(lines[15], ">00000008 (00000013) addi zero, zero, 0");
    assert_eq!(lines[16], "-00000009 (ffffffff) <unknown>");
    assert_eq!(lines[17], "-0000000a (00000000) <unknown>");
    assert_eq!(lines[18], "-0000000b (00000013) addi zero, zero, 0");
}

#[test]
fn test_missing_signal_aborts_render() {
    let core = Core::new(8, &nops(0..10));
    let err = core.render(0).unwrap_err();
    assert_eq!(err, ViewError::SignalNotFound(core.paths.memory_word(10)));
}

#[test]
fn test_cursor_before_first_sample() {
    let (header, waveform) = (MemoryHeader::new(), MemoryWaveform::new());
    let err = interactive(CharBuffer::new(8, 8), &waveform, &header, 3).unwrap_err();
    assert_eq!(err, ViewError::TimestampNotFound(3));
}

#[test]
fn test_configured_view_decodes_compressed() {
    let config = ViewConfig::from_toml_str("isa = \"rv32imc\"\nwindow_radius = 1").unwrap();
    let view = GeckoView::new(config).unwrap();
    let mut memory = nops(0..16);
    memory[8] = (8, 0x0000_0505);
    let core = Core::new(8, &memory);

    let buffer = view.interactive(CharBuffer::new(96, 19), &core.waveform, &core.header, 0).unwrap();
    let lines = buffer.lines();
    assert_eq!(lines[12].trim_end(), "-00000007 (00000013) addi zero, zero, 0");
    assert_eq!(lines[13].trim_end(), ">00000008 (00000505) c.addi a0, 1");
    assert_eq!(lines[15].trim_end(), "");
}

#[test]
fn test_render_from_json_trace() {
    let mut signals = Vec::new();
    let paths = SignalPaths::default();
    for i in 0..32u8 {
        signals.push(format!(r#"{{ "path": "{}", "width": 32, "changes": [[0, {}]] }}"#, paths.register_value(i), i));
        signals.push(format!(r#"{{ "path": "{}", "width": 3, "changes": [[0, 0]] }}"#, paths.hazard_front(i)));
        signals.push(format!(r#"{{ "path": "{}", "width": 3, "changes": [[0, "0"]] }}"#, paths.hazard_rear(i)));
    }
    signals.push(format!(r#"{{ "path": "{}", "width": 32, "changes": [[0, 0], [10, 3]] }}"#, paths.program_counter()));
    for address in 0..7 {
        signals.push(format!(r#"{{ "path": "{}", "width": 32, "changes": [[0, 19]] }}"#, paths.memory_word(address)));
    }
    let json = format!(r#"{{ "signals": [{}] }}"#, signals.join(","));

    let (header, waveform) = Trace::from_json_str(&json).unwrap().into_waveform().unwrap();
    let buffer = interactive(CharBuffer::new(128, 19), &waveform, &header, 12).unwrap();
    let lines = buffer.lines();
    assert_eq!(lines[1].trim_end(), "1");
    assert_eq!(&lines[10][96..121], "x31 (t6  ) 0x0000001f (0)");
    assert_eq!(lines[12].trim_end(), "-00000000 (00000013) addi zero, zero, 0");
    assert_eq!(lines[15].trim_end(), ">00000003 (00000013) addi zero, zero, 0");
}
