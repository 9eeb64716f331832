//! Loading picker items from files, standard input or the built-in demo set.

use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use log::debug;
use msel_core::Item;
use thiserror::Error;

/// Reasons an item list could not be loaded.
#[derive(Debug, Error)]
pub enum SourceError {
	#[error("failed to read items from {origin}")]
	Io {
		origin: String,
		#[source]
		source: io::Error,
	},
	#[error("failed to parse JSON items from {origin}")]
	Json {
		origin: String,
		#[source]
		source: serde_json::Error,
	},
	#[error("{origin}: entry {entry} has an empty id")]
	EmptyId { origin: String, entry: usize },
}

/// Where the item list comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemSource {
	File(PathBuf),
	Stdin,
	Demo,
}

impl ItemSource {
	/// Interpret an `--items` argument; `-` means standard input.
	#[must_use]
	pub fn from_arg(arg: &Path) -> Self {
		if arg.as_os_str() == "-" {
			Self::Stdin
		} else {
			Self::File(arg.to_path_buf())
		}
	}

	pub fn load(&self) -> Result<Vec<Item>, SourceError> {
		let items = match self {
			Self::Demo => demo_items(),
			Self::Stdin => {
				let mut text = String::new();
				io::stdin()
					.read_to_string(&mut text)
					.map_err(|source| SourceError::Io {
						origin: self.to_string(),
						source,
					})?;
				parse_items(&text, &self.to_string(), false)?
			}
			Self::File(path) => {
				let text = fs::read_to_string(path).map_err(|source| SourceError::Io {
					origin: self.to_string(),
					source,
				})?;
				let json = path
					.extension()
					.is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
				parse_items(&text, &self.to_string(), json)?
			}
		};
		debug!("loaded {} items from {self}", items.len());
		Ok(items)
	}
}

impl fmt::Display for ItemSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::File(path) => write!(f, "{}", path.display()),
			Self::Stdin => f.write_str("standard input"),
			Self::Demo => f.write_str("demo items"),
		}
	}
}

/// The six sample items `title1` to `title6`, with ids `1` to `6`.
#[must_use]
pub fn demo_items() -> Vec<Item> {
	(1..=6)
		.map(|n| Item::new(n.to_string(), format!("title{n}")))
		.collect()
}

/// Parse items from `text`.
///
/// JSON is an array of `{"id", "title"}` objects and is used when `json` is
/// set or the text starts with `[`. Otherwise each non-blank line is an item,
/// either `id<TAB>title` or a bare title that doubles as the id.
pub fn parse_items(text: &str, origin: &str, json: bool) -> Result<Vec<Item>, SourceError> {
	if json || text.trim_start().starts_with('[') {
		parse_json(text, origin)
	} else {
		parse_lines(text, origin)
	}
}

fn parse_json(text: &str, origin: &str) -> Result<Vec<Item>, SourceError> {
	let items: Vec<Item> = serde_json::from_str(text).map_err(|source| SourceError::Json {
		origin: origin.to_string(),
		source,
	})?;
	if let Some(index) = items.iter().position(|item| item.id.trim().is_empty()) {
		return Err(SourceError::EmptyId {
			origin: origin.to_string(),
			entry: index + 1,
		});
	}
	Ok(items)
}

fn parse_lines(text: &str, origin: &str) -> Result<Vec<Item>, SourceError> {
	let mut items = Vec::new();
	for (index, line) in text.lines().enumerate() {
		if line.trim().is_empty() {
			continue;
		}
		let item = match line.split_once('\t') {
			Some((id, title)) => {
				let id = id.trim();
				if id.is_empty() {
					return Err(SourceError::EmptyId {
						origin: origin.to_string(),
						entry: index + 1,
					});
				}
				let title = title.trim();
				Item::new(id, if title.is_empty() { id } else { title })
			}
			None => {
				let title = line.trim();
				Item::new(title, title)
			}
		};
		items.push(item);
	}
	Ok(items)
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use super::*;

	#[test]
	fn demo_items_are_six_titles() {
		let items = demo_items();
		assert_eq!(items.len(), 6);
		assert_eq!(items[0], Item::new("1", "title1"));
		assert_eq!(items[5], Item::new("6", "title6"));
	}

	#[test]
	fn lines_accept_tab_separated_and_bare_titles() {
		let items = parse_items("a\tApple\n\nbanana\nc\t\n", "test", false).unwrap();
		assert_eq!(
			items,
			vec![
				Item::new("a", "Apple"),
				Item::new("banana", "banana"),
				Item::new("c", "c"),
			]
		);
	}

	#[test]
	fn empty_id_reports_the_line() {
		let error = parse_items("a\tApple\n\tOrphan\n", "list.txt", false).unwrap_err();
		assert!(matches!(error, SourceError::EmptyId { entry: 2, .. }));
		assert_eq!(error.to_string(), "list.txt: entry 2 has an empty id");
	}

	#[test]
	fn json_is_detected_by_leading_bracket() {
		let text = r#" [{"id": "x", "title": "Ex"}, {"id": "y", "title": "Why"}]"#;
		let items = parse_items(text, "stdin", false).unwrap();
		assert_eq!(items, vec![Item::new("x", "Ex"), Item::new("y", "Why")]);
	}

	#[test]
	fn malformed_json_is_a_json_error() {
		let error = parse_items("{}", "items.json", true).unwrap_err();
		assert!(matches!(error, SourceError::Json { .. }));
		assert!(error.to_string().contains("items.json"));
	}

	#[test]
	fn files_load_by_extension() {
		let mut file = tempfile::Builder::new()
			.suffix(".json")
			.tempfile()
			.expect("tempfile");
		write!(file, r#"[{{"id": "1", "title": "one"}}]"#).expect("write");

		let source = ItemSource::from_arg(file.path());
		assert_eq!(source.load().unwrap(), vec![Item::new("1", "one")]);
	}

	#[test]
	fn missing_file_is_an_io_error() {
		let source = ItemSource::File(PathBuf::from("/definitely/not/here.txt"));
		assert!(matches!(source.load(), Err(SourceError::Io { .. })));
	}

	#[test]
	fn dash_means_stdin() {
		assert_eq!(ItemSource::from_arg(Path::new("-")), ItemSource::Stdin);
		assert_eq!(ItemSource::Stdin.to_string(), "standard input");
	}
}
