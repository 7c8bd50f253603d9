use clap::{Args, Parser, Subcommand, ValueEnum};
use registry::{SearchRequest, SortBy, SortOrder};
use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "registry-mcp",
    version,
    about = "MCP server for the French company registry",
    long_about = "Exposes company search and SIREN/SIRET lookups from recherche-entreprises.api.gouv.fr as MCP tools over SSE."
)]
pub struct RegistryCli {
    #[command(subcommand)]
    pub command: Commands,
}

impl RegistryCli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the MCP server (SSE on /sse and /messages, streamable HTTP on /mcp)
    Server(ServerArgs),
    /// Search companies and print the result
    Search(SearchArgs),
    /// Look up a company by SIREN or SIRET and print its details
    Details(DetailsArgs),
}

/// Registry settings that override the settings file.
#[derive(Args, Debug, Default)]
pub struct RegistryArgs {
    /// Base URL of the registry API
    #[arg(long, value_name = "URL")]
    pub api_base_url: Option<String>,

    /// Timeout for registry requests, in seconds
    #[arg(long, value_name = "SECONDS")]
    pub request_timeout_secs: Option<u64>,

    /// Path to the settings file (default: <data dir>/company-registry-mcp/mcp.settings.json)
    #[arg(long, value_name = "FILE")]
    pub mcp_configuration_path: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ServerArgs {
    /// Port to bind. Defaults to 3001, or a random free port when 3001 is busy
    #[arg(long)]
    pub port: Option<u16>,

    /// Address to bind
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub host: IpAddr,

    /// Add this server to an MCP client configuration file (example: ~/.cursor/mcp.json)
    #[arg(long, value_name = "FILE")]
    pub register_mcp: Option<PathBuf>,

    /// Directory for the rotating log files (default: <data dir>/company-registry-mcp/logs)
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Write JSON log lines to the log file only
    #[arg(long, default_value_t = false)]
    pub json_logs: bool,

    #[command(flatten)]
    pub registry: RegistryArgs,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
pub enum SortByArg {
    Score,
    CreationDate,
    Name,
}

impl From<SortByArg> for SortBy {
    fn from(value: SortByArg) -> Self {
        match value {
            SortByArg::Score => SortBy::Score,
            SortByArg::CreationDate => SortBy::CreationDate,
            SortByArg::Name => SortBy::Name,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
pub enum SortOrderArg {
    Asc,
    Desc,
}

impl From<SortOrderArg> for SortOrder {
    fn from(value: SortOrderArg) -> Self {
        match value {
            SortOrderArg::Asc => SortOrder::Asc,
            SortOrderArg::Desc => SortOrder::Desc,
        }
    }
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Company name, SIREN, SIRET or any free text
    pub query: String,

    #[arg(long)]
    pub page: Option<u32>,

    #[arg(long)]
    pub per_page: Option<u32>,

    #[arg(long)]
    pub postal_code: Option<String>,

    /// NAF/APE activity code (example: 62.01Z)
    #[arg(long)]
    pub naf_code: Option<String>,

    /// YYYY-MM-DD
    #[arg(long)]
    pub creation_date_min: Option<String>,

    /// YYYY-MM-DD
    #[arg(long)]
    pub creation_date_max: Option<String>,

    #[arg(long)]
    pub legal_status: Option<String>,

    #[arg(long)]
    pub employee_range: Option<String>,

    /// PME, ETI or GE
    #[arg(long)]
    pub company_category: Option<String>,

    #[arg(long, value_enum)]
    pub sort_by: Option<SortByArg>,

    #[arg(long, value_enum)]
    pub sort_order: Option<SortOrderArg>,

    #[command(flatten)]
    pub registry: RegistryArgs,

    #[arg(short, long)]
    pub verbose: bool,
}

impl SearchArgs {
    pub fn to_request(&self) -> SearchRequest {
        SearchRequest {
            query: self.query.clone(),
            page: self.page,
            per_page: self.per_page,
            postal_code: self.postal_code.clone(),
            naf_code: self.naf_code.clone(),
            creation_date_min: self.creation_date_min.clone(),
            creation_date_max: self.creation_date_max.clone(),
            legal_status: self.legal_status.clone(),
            employee_range: self.employee_range.clone(),
            company_category: self.company_category.clone(),
            sort_by: self.sort_by.map(Into::into),
            sort_order: self.sort_order.map(Into::into),
        }
    }
}

#[derive(Args, Debug)]
pub struct DetailsArgs {
    /// 9-digit SIREN or 14-digit SIRET
    pub identifier: String,

    #[command(flatten)]
    pub registry: RegistryArgs,

    #[arg(short, long)]
    pub verbose: bool,
}
