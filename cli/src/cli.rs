use std::path::PathBuf;

/// Road grade map CLI
#[derive(clap::Parser, Debug)]
#[command(name = "roadgrade", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// View configuration (JSON); built-in defaults when omitted
    #[arg(short, long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// List the evaluation dimensions found in a roads file
    Dimensions(DimensionsArgs),

    /// Print the average of every evaluation dimension
    Summary(SummaryArgs),

    /// Style every road for a dimension and write the result as GeoJSON
    Render(RenderArgs),
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, clap::ValueEnum)]
pub enum Policy { SampleFirst, UnionAll }

#[derive(clap::Args, Debug)]
pub struct DimensionsArgs {
    /// Roads GeoJSON FeatureCollection
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub roads: PathBuf,

    /// How dimensions are discovered, overrides the configuration
    #[arg(long, value_enum)]
    pub policy: Option<Policy>,
}

#[derive(clap::Args, Debug)]
pub struct SummaryArgs {
    /// Roads GeoJSON FeatureCollection
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub roads: PathBuf,

    /// Key sub-type averages as "sub_type_grades.<name>"
    #[arg(long)]
    pub namespaced: bool,
}

#[derive(clap::Args, Debug)]
pub struct RenderArgs {
    /// Roads GeoJSON FeatureCollection
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub roads: PathBuf,

    /// Dimension to style by, defaults to the configured default
    #[arg(short, long)]
    pub dimension: Option<String>,

    /// Sub-dimension, only used with --dimension sub_type_grades
    #[arg(short, long)]
    pub sub: Option<String>,

    /// Output GeoJSON file, defaults to stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}
