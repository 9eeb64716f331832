use std::fmt::Write;

use msel::EmitPolicy;

use super::ResolvedConfig;

pub(super) fn summary(config: &ResolvedConfig) -> String {
	let mut out = String::new();
	let _ = writeln!(out, "Effective configuration:");
	let _ = writeln!(out, "  Items: {}", config.items);
	let _ = writeln!(out, "  Title: {}", config.title);
	let _ = writeln!(out, "  Placeholder: {}", config.placeholder);
	if config.value.is_empty() {
		let _ = writeln!(out, "  Initial selection: (none)");
	} else {
		let _ = writeln!(out, "  Initial selection: {}", config.value.join(", "));
	}
	let _ = writeln!(out, "  Emit: {}", emit_to_word(config.emit));
	let _ = writeln!(out, "  Debounce: {} ms", config.debounce.as_millis());
	let _ = writeln!(out, "  Max rows: {}", config.max_rows);
	let _ = writeln!(out, "  UI theme: {}", config.theme_name);
	let _ = writeln!(out, "  Log level: {}", config.log_level);
	match &config.log_file {
		Some(path) => {
			let _ = writeln!(out, "  Log file: {}", path.display());
		}
		None => {
			let _ = writeln!(out, "  Log file: (unavailable)");
		}
	}
	out
}

fn emit_to_word(emit: EmitPolicy) -> &'static str {
	match emit {
		EmitPolicy::Always => "always",
		EmitPolicy::DeselectOnly => "deselect-only",
	}
}
