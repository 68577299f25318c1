//! Layer builders shared by the configuration tests.

use ortho_config::MergeComposer;
use serde_json::Value;

use crate::GreenlightConfig;

/// Configuration source, listed from lowest to highest precedence.
#[derive(Debug, Clone, Copy)]
pub enum Source {
    Defaults,
    File,
    Environment,
    Cli,
}

impl Source {
    fn push_onto(self, composer: &mut MergeComposer, value: Value) {
        match self {
            Self::Defaults => composer.push_defaults(value),
            Self::File => composer.push_file(value, None),
            Self::Environment => composer.push_environment(value),
            Self::Cli => composer.push_cli(value),
        }
    }
}

/// Merges `layers` in the given order into a [`GreenlightConfig`].
pub fn merge(layers: &[(Source, Value)]) -> GreenlightConfig {
    let composer = layers
        .iter()
        .fold(MergeComposer::new(), |mut composer, (source, value)| {
            source.push_onto(&mut composer, value.clone());
            composer
        });

    GreenlightConfig::merge_from_layers(composer.layers())
        .unwrap_or_else(|error| panic!("layers should merge: {error}"))
}
