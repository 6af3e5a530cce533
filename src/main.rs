use anyhow::Context;
use dotenv::dotenv;
use env_logger::Env;

use hotel_catalog::catalog::CatalogClient;
use hotel_catalog::sort::{sort_hotels, SortBy};
use hotel_catalog::thumbnail::ThumbnailCache;
use hotel_catalog::view;

struct Args {
    sort_by: SortBy,
    prefetch_thumbnails: bool,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut sort_by = SortBy::Recommended;
    let mut prefetch_thumbnails = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--thumbnails" => prefetch_thumbnails = true,
            mode => sort_by = mode.parse().map_err(anyhow::Error::msg)?,
        }
    }
    Ok(Args {
        sort_by,
        prefetch_thumbnails,
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logger and environment
    dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let args = parse_args().context("usage: hotel-catalog [SORT_MODE] [--thumbnails]")?;

    let client = CatalogClient::from_env();
    log::info!("Fetching catalog from {}", client.endpoint());

    // A failed fetch keeps the previous list, which on first load is empty.
    let mut hotels = match client.fetch().await {
        Ok(hotels) => {
            log::info!("Loaded {} hotels", hotels.len());
            hotels
        }
        Err(err) => {
            log::warn!("Catalog fetch failed, keeping empty list: {err}");
            Vec::new()
        }
    };

    sort_hotels(&mut hotels, args.sort_by);
    print!("{}", view::render(&hotels, "en"));

    if args.prefetch_thumbnails {
        let cache = ThumbnailCache::new(reqwest::Client::new());
        for hotel in &hotels {
            match cache.fetch(&hotel.thumbnail_url).await {
                Ok(bytes) => log::info!("{}: thumbnail {} bytes", hotel.id, bytes.len()),
                Err(err) => log::warn!("{}: thumbnail fetch failed: {err}", hotel.id),
            }
        }
    }

    Ok(())
}
