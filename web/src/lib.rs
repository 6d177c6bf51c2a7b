use clap::Parser;
use pairs_core::{Coord, GameConfig};
use wasm_bindgen::prelude::*;

mod game;
mod utils;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Board dimension, must be even
    #[arg(short, long, default_value_t = GameConfig::DEFAULT_DIMENSION)]
    dimension: Coord,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let args = Args::try_parse_from(location_hash.split(['#', '&'])).expect("Could not parse args");
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    log::debug!("dimension: {}, seed: {:?}", args.dimension, args.seed);

    let root: web_sys::Element = document()
        .get_element_by_id("game")
        .expect("Could not find id=\"game\" element");

    let config = match GameConfig::new(args.dimension) {
        Ok(config) => config,
        Err(err) => {
            log::error!("Cannot start game: {}", err);
            root.set_text_content(Some(&err.to_string()));
            return;
        }
    };

    log::debug!("App started");
    let props = game::GameProps {
        config,
        seed: args.seed,
    };
    yew::Renderer::<game::GameView>::with_root_and_props(root, props).render();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(hash: &str) -> Args {
        Args::try_parse_from(hash.split(['#', '&'])).unwrap()
    }

    #[test]
    fn empty_hash_uses_defaults() {
        let args = parse("");
        assert_eq!(args.dimension, GameConfig::DEFAULT_DIMENSION);
        assert_eq!(args.seed, None);
    }

    #[test]
    fn hash_arguments_are_parsed() {
        let args = parse("#--dimension=2&--seed=42");
        assert_eq!(args.dimension, 2);
        assert_eq!(args.seed, Some(42));
    }

    #[test]
    fn odd_dimension_parses_but_is_rejected_by_config() {
        let args = parse("#-d3");
        assert!(GameConfig::new(args.dimension).is_err());
    }
}
