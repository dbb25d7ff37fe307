use clap::Parser;
use std::path::Path;

use gecko_cli::commands::{parse_word, Cli, Command, WaveformFormat};

#[test]
fn test_parse_render() {
    let cli = Cli::try_parse_from([
        "gecko-view",
        "render",
        "--trace",
        "sim.json",
        "--cursor",
        "1200",
        "--isa",
        "rv32imc",
    ])
    .unwrap();
    let Command::Render(cmd) = cli.command else { panic!("expected render") };
    assert_eq!(cmd.trace.to_str(), Some("sim.json"));
    assert_eq!(cmd.cursor, 1200);
    assert_eq!((cmd.width, cmd.height), (128, 19));
    assert_eq!(cmd.isa.as_deref(), Some("rv32imc"));
}

#[test]
fn test_render_requires_cursor() {
    assert!(Cli::try_parse_from(["gecko-view", "render", "--trace", "sim.json"]).is_err());
}

#[test]
fn test_parse_decode_words() {
    let cli =
        Cli::try_parse_from(["gecko-view", "decode", "--isa", "rv64gc", "0x00000013", "0505"])
            .unwrap();
    let Command::Decode(cmd) = cli.command else { panic!("expected decode") };
    assert_eq!(cmd.isa, "rv64gc");
    assert_eq!(cmd.words, vec![0x13, 0x505]);
    assert!(Cli::try_parse_from(["gecko-view", "decode"]).is_err());
    assert!(Cli::try_parse_from(["gecko-view", "decode", "0xgg"]).is_err());
}

#[test]
fn test_parse_word() {
    assert_eq!(parse_word("0xdead_beef"), Ok(0xdead_beef));
    assert_eq!(parse_word("FF"), Ok(0xff));
    assert!(parse_word("0x1_0000_0000").is_err());
}

#[test]
fn test_parse_config() {
    let cli = Cli::try_parse_from(["gecko-view", "config", "--resolved"]).unwrap();
    assert!(matches!(cli.command, Command::Config(ref cmd) if cmd.resolved));
}

#[test]
fn test_waveform_format_from_extension() {
    assert_eq!(WaveformFormat::from_path(Path::new("build/gecko.vcd")), WaveformFormat::Vcd);
    assert_eq!(WaveformFormat::from_path(Path::new("GECKO.VCD")), WaveformFormat::Vcd);
    assert_eq!(WaveformFormat::from_path(Path::new("sim.json")), WaveformFormat::Json);
    assert_eq!(WaveformFormat::from_path(Path::new("trace")), WaveformFormat::Json);
}
