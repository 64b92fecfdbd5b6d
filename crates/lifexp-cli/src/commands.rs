use anyhow::Result;
use comfy_table::Table;

use lifexp_cli::pipeline::{PipelineConfig, RunResult, load_and_clean, run};
use lifexp_ingest::DataSource;
use lifexp_model::{Region, SourceFormat};
use lifexp_transform::unique_regions;

use crate::cli::{CleanArgs, InputArgs, RegionsArgs};
use crate::summary::{apply_table_style, kind_cell};

pub fn run_clean(args: &CleanArgs) -> Result<RunResult> {
    let format = SourceFormat::from(args.input.source);
    let config = PipelineConfig::new(args.country.as_str(), format, &args.input.data_dir)
        .with_input(args.input.input.clone())
        .with_output_dir(args.output_dir.clone());
    let result = run(&config)?;
    if result.region.is_none() {
        eprintln!(
            "warning: '{}' is not a known region code; no rows were selected",
            result.country
        );
    }
    Ok(result)
}

pub fn run_regions(args: &RegionsArgs) -> Result<()> {
    if args.from_data {
        return print_regions_in_data(&args.input);
    }
    let regions = if args.countries_only {
        Region::actual_countries()
    } else {
        Region::ALL.to_vec()
    };
    let mut table = Table::new();
    table.set_header(vec!["Code", "Kind"]);
    apply_table_style(&mut table);
    for region in regions {
        table.add_row(vec![
            comfy_table::Cell::new(region.as_str()),
            kind_cell(Some(region)),
        ]);
    }
    println!("{table}");
    Ok(())
}

fn print_regions_in_data(input: &InputArgs) -> Result<()> {
    let format = SourceFormat::from(input.source);
    let mut source = DataSource::in_dir(format, &input.data_dir);
    if let Some(path) = &input.input {
        source.path = path.clone();
    }
    let (_, cleaned) = load_and_clean(&source)?;
    let codes = unique_regions(&cleaned.data)?;
    let mut table = Table::new();
    table.set_header(vec!["Code", "Kind"]);
    apply_table_style(&mut table);
    for code in codes {
        let region = code.parse::<Region>().ok();
        table.add_row(vec![comfy_table::Cell::new(&code), kind_cell(region)]);
    }
    println!("{table}");
    Ok(())
}
