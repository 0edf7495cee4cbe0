use crate::reports;
use clap::Args;
use scanforge::error::SfResult;
use scanforge::frequencies::FrequencyTable;
use scanforge::grid::standard_grids;

#[derive(Args, Debug, Clone)]
pub struct ShowArgs {
    /// Only show orderings whose name contains this filter
    #[arg(short, long)]
    pub layout: Option<String>,

    /// Emit markdown pipe tables instead of ASCII boxes
    #[arg(long, default_value_t = false)]
    pub markdown: bool,
}

pub fn run(args: ShowArgs, table: &FrequencyTable) -> SfResult<()> {
    for (ordering, grid) in standard_grids(table)? {
        let name = ordering.to_string();
        if let Some(filter) = &args.layout {
            if !name.contains(&filter.to_lowercase()) {
                continue;
            }
        }

        let (rows, cols) = grid.shape();
        let title = format!("{} ({}x{})", name, rows, cols);
        if args.markdown {
            println!("### {}\n", title);
            println!("{}", reports::markdown_grid(&grid));
        } else {
            reports::print_grid(&title, &grid);
        }
    }
    Ok(())
}
