use std::env;

use log::debug;
use recipe_home::{load_home_page, HomeConfig, RandomSource, SeededRandom, SortOrder};

const USAGE: &str = "Usage: recipe-home [search term] [--sort latest|popularity|rating|reviews] [--seed <n>] [--shuffle]";

struct Args {
    search: Option<String>,
    sort: SortOrder,
    seed: Option<u64>,
    shuffle: bool,
}

fn parse_args(args: &[String]) -> Result<Args, Box<dyn std::error::Error>> {
    let mut parsed = Args {
        search: None,
        sort: SortOrder::default(),
        seed: None,
        shuffle: false,
    };

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--sort" => {
                let value = iter.next().ok_or(USAGE)?;
                parsed.sort = value.parse()?;
            }
            "--seed" => {
                let value = iter.next().ok_or(USAGE)?;
                parsed.seed = Some(value.parse()?);
            }
            "--shuffle" => parsed.shuffle = true,
            "-h" | "--help" => return Err(USAGE.into()),
            other if other.starts_with("--") => {
                return Err(format!("Unknown option {}\n{}", other, USAGE).into())
            }
            other => parsed.search = Some(other.to_string()),
        }
    }

    Ok(parsed)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let args = parse_args(&args)?;

    let config = HomeConfig::load()?;
    debug!("Loaded configuration: {:?}", config);

    let random: Box<dyn RandomSource> = match args.seed {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(SeededRandom::from_entropy()),
    };

    let mut page = load_home_page(&config, random).await?;
    if args.shuffle {
        page.randomize();
    }
    if let Some(search) = args.search {
        page.set_search(search);
    }
    page.set_sort(args.sort);

    print!("{}", page.render(page.translator()));
    Ok(())
}
