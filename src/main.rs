use std::fs;

use wander::{
    cli,
    config::{Config, WanderConfig},
    error::{WanderError, WanderResult},
    fetch,
    logger::Logger,
    utils::expand_tilde,
    value::Value,
    wanderer::Wanderer,
};

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> WanderResult<()> {
    let args = cli::parse();
    let config = Config::load()?;
    let logger = Logger::new(args.log_mode);

    let mut haystacks: Vec<(String, String)> = Vec::new();

    if let Some(url) = &args.url {
        let spinner = logger.spinner(&format!("fetching {url}"))?;
        let client = fetch::client(&config.user_agent)?;
        let html = fetch::get_with_retry(&client, url, config.max_attempts)?;
        spinner.finish_and_clear();
        haystacks.push((url.clone(), html));
    }

    for path in &args.inputs {
        let path = expand_tilde(path.clone())?;
        let text = fs::read_to_string(&path)?;
        haystacks.push((path.display().to_string(), text));
    }

    if haystacks.is_empty() {
        return Err(WanderError::Input(
            "no haystacks; pass input files or --url".to_string(),
        ));
    }

    let show_labels = haystacks.len() > 1;
    let bar = logger.bar(haystacks.len() as u64)?;

    for (label, text) in haystacks {
        let result = extract(&args, &config, text);
        if show_labels {
            println!("{label}:");
        }
        print_value(&result);
        bar.inc(1);
    }
    bar.finish_and_clear();

    Ok(())
}

fn extract(args: &cli::Args, config: &WanderConfig, text: String) -> Value {
    let mut wanderer = Wanderer::new(text);

    if args.clean {
        wanderer = wanderer.clean_html();
        for rule in &config.strip {
            wanderer = wanderer.remove_between(&rule.from, &rule.to, rule.inclusive);
        }
    }

    if let Some(anchors) = &args.walk {
        let anchors: Vec<&str> = anchors.iter().map(String::as_str).collect();
        wanderer = if args.repeat {
            wanderer.walk_repeat(&anchors, args.start, args.inclusive)
        } else {
            wanderer.walk(&anchors, args.start, args.inclusive)
        };
    } else if let Some(seed) = &args.find {
        wanderer = if args.repeat {
            wanderer.find_all(seed, args.start, args.inclusive)
        } else {
            wanderer.find(seed, args.start, args.inclusive)
        };
    } else if let Some(name) = &args.get_value {
        wanderer = wanderer.get_value(name);
    }

    wanderer.into_value()
}

fn print_value(value: &Value) {
    match value {
        Value::Scalar(text) => println!("{text}"),
        Value::Sequence(items) => {
            for item in items {
                print_value(item);
            }
        }
    }
}
