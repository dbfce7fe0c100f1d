use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Action {
    /// create the host(s) in one or more inventories
    Create,
    /// accepted for compatibility; not implemented
    Update,
    /// remove the host(s) from selected inventories
    Delete,
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// type of action to perform
    #[arg(value_enum)]
    pub action: Action,

    /// name of a host to perform an action on; supports ranges such as lc02g[01-30]
    pub name: String,

    /// name of an inventory to perform an action on; can be used repeatedly
    #[arg(short, long = "inventory", value_name = "NAME")]
    pub inventories: Vec<String>,

    /// path to the controller connection config
    #[arg(short, long, value_name = "FILE", default_value = "config.json")]
    pub config: PathBuf,
}
