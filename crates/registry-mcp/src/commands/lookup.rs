use anyhow::Result;
use logging::LogMode;
use registry::{CompanyLookupService, ToolResult};
use std::process;

use crate::cli::{DetailsArgs, SearchArgs};
use crate::commands::{build_lookup_service, load_configuration};

pub async fn search(args: SearchArgs) -> Result<()> {
    logging::init(LogMode::Cli, args.verbose)?;

    let configuration = load_configuration(&args.registry)?;
    let lookup_service = build_lookup_service(&configuration)?;

    print_tool_result(&run_search(&lookup_service, &args).await);
    Ok(())
}

pub async fn details(args: DetailsArgs) -> Result<()> {
    logging::init(LogMode::Cli, args.verbose)?;

    let configuration = load_configuration(&args.registry)?;
    let lookup_service = build_lookup_service(&configuration)?;

    print_tool_result(&run_details(&lookup_service, &args).await);
    Ok(())
}

async fn run_search(lookup_service: &CompanyLookupService, args: &SearchArgs) -> ToolResult {
    lookup_service.search(&args.to_request()).await
}

async fn run_details(lookup_service: &CompanyLookupService, args: &DetailsArgs) -> ToolResult {
    lookup_service.get_details(&args.identifier).await
}

fn print_tool_result(result: &ToolResult) {
    if result.is_error {
        eprintln!("{}", result.text());
        process::exit(1);
    }
    println!("{}", result.text());
}
