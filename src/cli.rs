use clap::Parser;

/// Parse command line arguments into the strongly typed [`CliArgs`] structure.
pub(crate) fn parse_cli() -> CliArgs {
	CliArgs::parse()
}

#[derive(Parser, Debug)]
#[command(
	name = "themecat",
	version,
	about = "Build the themes.json catalog for the memory game"
)]
/// Command-line arguments accepted by the `themecat` binary.
///
/// The themes root and output file are fixed paths shared with the game's
/// build layout, so there is deliberately nothing here to configure them.
pub(crate) struct CliArgs {
	#[arg(
		short = 'v',
		long,
		help = "Log each theme as it is catalogued (default: disabled)"
	)]
	pub(crate) verbose: bool,
}

#[cfg(test)]
mod tests {
	use clap::{CommandFactory, FromArgMatches};

	use super::*;

	#[test]
	fn parse_cli_accepts_default_arguments() {
		let command = CliArgs::command();
		let mut matches = command.get_matches_from(vec!["themecat"]);
		let parsed = CliArgs::from_arg_matches_mut(&mut matches).expect("parses");
		assert!(!parsed.verbose);
	}

	#[test]
	fn verbose_flag_is_recognised() {
		let command = CliArgs::command();
		let mut matches = command.get_matches_from(vec!["themecat", "--verbose"]);
		let parsed = CliArgs::from_arg_matches_mut(&mut matches).expect("parses");
		assert!(parsed.verbose);
	}
}
