use std::io;

use anyhow::{Result, bail};
use comfy_table::Table;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::info;

use bracket_catalog::Catalog;
use bracket_session::EliminationSession;

use crate::cli::{CuisinesArgs, PlayArgs};
use crate::game::{PlayResult, play};
use crate::summary::apply_table_style;

pub fn run_cuisines(args: &CuisinesArgs) -> Result<()> {
    let catalog = Catalog::from_path(&args.catalog)?;
    let mut table = Table::new();
    table.set_header(vec!["Cuisine", "Items"]);
    apply_table_style(&mut table);
    for cuisine in catalog.cuisines() {
        let count = catalog.by_cuisine(&cuisine).len();
        table.add_row(vec![cuisine, count.to_string()]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_play(args: &PlayArgs) -> Result<PlayResult> {
    let catalog = Catalog::from_path(&args.catalog)?;
    let mut ids = match &args.cuisine {
        Some(cuisine) => {
            let ids: Vec<_> = catalog
                .by_cuisine(cuisine)
                .iter()
                .map(|item| item.id.clone())
                .collect();
            if ids.is_empty() {
                bail!("no items in cuisine {cuisine:?}; try `bracket cuisines`");
            }
            ids
        }
        None => catalog.ids(),
    };
    if ids.is_empty() {
        bail!("catalog {} is empty", args.catalog.display());
    }

    // The session never reorders items, so any shuffling happens here,
    // before construction.
    if args.shuffle {
        let mut rng = match args.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        ids.shuffle(&mut rng);
    }

    info!(items = ids.len(), shuffle = args.shuffle, "starting game");
    let session = EliminationSession::new(ids)?;
    let stdin = io::stdin();
    play(&catalog, session, stdin.lock(), io::stdout())
}
