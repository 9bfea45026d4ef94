pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli_args::CliConfig;

#[cfg(feature = "cli")]
mod cli_args {
    use crate::app::Command;
    use crate::core::ConfigProvider;
    use crate::utils::error::Result;
    use crate::utils::validation::{validate_path, Validate};
    use clap::Parser;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Serialize, Deserialize, Parser)]
    #[command(name = "sgaea")]
    #[command(about = "Student enrollment records: students, courses and grades")]
    pub struct CliConfig {
        #[arg(long, default_value = "./data")]
        pub data_dir: String,

        #[arg(long, default_value = "academy.json")]
        pub snapshot_file: String,

        #[arg(long, help = "Read settings from a TOML file instead of flags")]
        pub config: Option<String>,

        #[arg(long, help = "Load demo data when no snapshot exists yet")]
        pub seed: bool,

        #[arg(long, help = "Enable verbose output")]
        pub verbose: bool,

        #[command(subcommand)]
        pub command: Command,
    }

    impl ConfigProvider for CliConfig {
        fn data_dir(&self) -> &str {
            &self.data_dir
        }

        fn snapshot_file(&self) -> &str {
            &self.snapshot_file
        }

        fn seed_demo_data(&self) -> bool {
            self.seed
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validate_path("data_dir", &self.data_dir)?;
            validate_path("snapshot_file", &self.snapshot_file)?;
            Ok(())
        }
    }

}
