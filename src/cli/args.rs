// args.rs - Command line arguments definition

use argh::FromArgs;

/// Default merged file, written to the current working directory
pub const DEFAULT_OUTPUT: &str = "concatenated_output.csv";

#[derive(FromArgs, Debug, Default)]
/// iptcconcat - Concatenate IPTC metadata exports and validate the result
pub struct Args {
    /// path to the directory containing the colon-delimited CSV files
    #[argh(positional)]
    pub input_directory: Option<String>,

    /// merged output file (default: concatenated_output.csv)
    #[argh(option)]
    pub output: Option<String>,

    /// field delimiter of the input files (default: ':')
    #[argh(option)]
    pub input_delimiter: Option<String>,

    /// field delimiter of the merged file (default: ',')
    #[argh(option)]
    pub output_delimiter: Option<String>,

    /// file name suffix selecting input files (default: .csv)
    #[argh(option)]
    pub suffix: Option<String>,

    /// skip merging and validate an existing merged file
    #[argh(switch)]
    pub validate_only: bool,

    /// exit with status 2 when any row fails validation
    #[argh(switch)]
    pub strict: bool,

    /// suppress progress messages (the validation report is still printed)
    #[argh(switch)]
    pub quiet: bool,

    /// list the validation rules in evaluation order and exit
    #[argh(switch)]
    pub list_rules: bool,

    /// path to TOML configuration file
    #[argh(option)]
    pub config: Option<String>,

    /// generate sample configuration file and exit
    #[argh(switch)]
    pub generate_config: bool,
}
