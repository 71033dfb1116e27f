//! Command line parsing and [`EmbedConfig`] construction.

use std::path::PathBuf;

use clap::{Arg, ArgMatches, Command, value_parser};
use font_embedder::{
    DEFAULT_EXTENSION, EmbedConfig,
    layout::{DEFAULT_NAMESPACE, LayoutError, check_include_path, check_namespace},
};

/// Parses `font-embedder`'s arguments to construct an [`EmbedConfig`].
pub fn get_config() -> EmbedConfig {
    parse_arguments(&command_parser().get_matches())
}

/// Parses the arguments required to produce a valid [`EmbedConfig`].
pub fn parse_arguments(matches: &ArgMatches) -> EmbedConfig {
    let path = |id: &str| {
        matches
            .get_one::<PathBuf>(id)
            .cloned()
            .unwrap_or_else(|| unreachable!("`{id}` is a required argument"))
    };

    let namespace = matches
        .get_one::<String>("namespace")
        .cloned()
        .unwrap_or_else(|| unreachable!("`namespace` should have a default value"));

    let extension = matches
        .get_one::<String>("extension")
        .map(|extension| extension.trim_start_matches('.').to_owned())
        .unwrap_or_else(|| unreachable!("`extension` should have a default value"));

    EmbedConfig {
        input_dir: path("input-dir"),
        output_header: path("output-header"),
        output_source: path("output-source"),
        namespace,
        include_path: matches.get_one::<String>("include").cloned(),
        extension,
    }
}

/// Returns the command parser for `font-embedder`.
pub fn command_parser() -> Command {
    let input_dir = Arg::new("input-dir")
        .help("Directory containing the font files to embed")
        .value_parser(value_parser!(PathBuf))
        .required(true);

    let output_header = Arg::new("output-header")
        .help("Output path for the generated header")
        .value_parser(value_parser!(PathBuf))
        .required(true);

    let output_source = Arg::new("output-source")
        .help("Output path for the generated source")
        .value_parser(value_parser!(PathBuf))
        .required(true);

    let namespace = Arg::new("namespace")
        .long("namespace")
        .help("C++ namespace enclosing the generated symbols")
        .value_parser(parse_namespace)
        .default_value(DEFAULT_NAMESPACE);

    let include = Arg::new("include")
        .long("include")
        .help("Path used by the source to include the header [default: the header's file name]")
        .value_parser(parse_include_path);

    let extension = Arg::new("extension")
        .long("extension")
        .help("Extension of the font files to embed")
        .default_value(DEFAULT_EXTENSION);

    Command::new("font-embedder")
        .about("Embeds TrueType fonts into a C++ header and source pair")
        .arg(input_dir)
        .arg(output_header)
        .arg(output_source)
        .arg(namespace)
        .arg(include)
        .arg(extension)
}

/// Accepts `value` if [`check_namespace`] does.
fn parse_namespace(value: &str) -> Result<String, LayoutError> {
    check_namespace(value).map(|()| value.to_owned())
}

/// Accepts `value` if [`check_include_path`] does.
fn parse_include_path(value: &str) -> Result<String, LayoutError> {
    check_include_path(value).map(|()| value.to_owned())
}

#[cfg(test)]
mod test {
    use std::path::PathBuf;

    use super::{command_parser, parse_arguments};

    #[test]
    fn defaults() {
        let matches = command_parser()
            .try_get_matches_from(["font-embedder", "fonts", "ui/fonts.h", "ui/fonts.cpp"])
            .unwrap();
        let config = parse_arguments(&matches);

        assert_eq!(config.input_dir, PathBuf::from("fonts"));
        assert_eq!(config.output_header, PathBuf::from("ui/fonts.h"));
        assert_eq!(config.output_source, PathBuf::from("ui/fonts.cpp"));
        assert_eq!(config.namespace, "EmbeddedFonts");
        assert_eq!(config.include_path, None);
        assert_eq!(config.extension, "ttf");
    }

    #[test]
    fn options() {
        let matches = command_parser()
            .try_get_matches_from([
                "font-embedder",
                "fonts",
                "out/fonts.h",
                "out/fonts.cpp",
                "--namespace",
                "Assets",
                "--include",
                "ui/fonts.h",
                "--extension",
                ".otf",
            ])
            .unwrap();
        let config = parse_arguments(&matches);

        assert_eq!(config.namespace, "Assets");
        assert_eq!(config.include_path.as_deref(), Some("ui/fonts.h"));
        assert_eq!(config.extension, "otf");
    }

    #[test]
    fn rejects_malformed_namespace() {
        let result = command_parser().try_get_matches_from([
            "font-embedder",
            "fonts",
            "fonts.h",
            "fonts.cpp",
            "--namespace",
            "my fonts",
        ]);
        assert!(result.is_err());

        let result = command_parser().try_get_matches_from([
            "font-embedder",
            "fonts",
            "fonts.h",
            "fonts.cpp",
            "--namespace",
            "app::fonts",
        ]);
        assert_eq!(parse_arguments(&result.unwrap()).namespace, "app::fonts");
    }

    #[test]
    fn rejects_malformed_include() {
        let result = command_parser().try_get_matches_from([
            "font-embedder",
            "fonts",
            "fonts.h",
            "fonts.cpp",
            "--include",
            "fonts>.h",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn missing_positional() {
        let result = command_parser().try_get_matches_from(["font-embedder", "fonts", "fonts.h"]);
        assert!(result.is_err());
    }

    #[test]
    fn command_is_consistent() {
        command_parser().debug_assert();
    }
}
