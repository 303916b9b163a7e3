use anyhow::Result;

fn main() -> Result<()> {
    let args = bib_relink::cli::parse();
    bib_relink::app::run(args)
}
