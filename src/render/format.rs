use clap::ValueEnum;

/// A rendering format.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum RenderFormat {
    /// A host document serialized as HTML after mounting.
    #[default]
    Html,
    /// An element tree serialized as JSON.
    Json,
}
