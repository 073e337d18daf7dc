// vim: set ai et ts=4 sw=4 sts=4:
use std::convert::TryFrom;
use std::path::{Path, PathBuf};
use log::debug;
use yaml_rust::{Yaml, YamlLoader};

use super::error::{Error, Result, read_input};

#[derive(Debug, Clone, PartialEq)]
pub struct PatrolConfig {
    pub input: PathBuf,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RaceConfig {
    pub input: PathBuf,
    pub min_savings: u32,
    pub short_budget: u32,
    pub long_budget: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RamRunConfig {
    pub input: PathBuf,
    pub width: usize,
    pub height: usize,
    pub fallen: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrintQueueConfig {
    pub input: PathBuf,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub patrol: PatrolConfig,
    pub race: RaceConfig,
    pub ram_run: RamRunConfig,
    pub print_queue: PrintQueueConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            patrol: PatrolConfig { input: PathBuf::from("day_6.in") },
            race: RaceConfig {
                input: PathBuf::from("day_20.in"),
                min_savings: 100,
                short_budget: 2,
                long_budget: 20,
            },
            ram_run: RamRunConfig {
                input: PathBuf::from("day_18.in"),
                width: 71,
                height: 71,
                fallen: 1024,
            },
            print_queue: PrintQueueConfig { input: PathBuf::from("day_5.in") },
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Config> {
        let text = read_input(path)?;
        debug!("loading settings from {}", path.display());
        Self::from_yaml_str(&text)
    }

    pub fn from_yaml_str(s: &str) -> Result<Config> {
        let docs: Vec<Yaml> = YamlLoader::load_from_str(s)?;
        match docs.first() {
            Some(doc) => Self::from_yaml(doc),
            None      => Ok(Config::default()),
        }
    }

    /// Keys missing from `doc` keep their defaults.
    pub fn from_yaml(doc: &Yaml) -> Result<Config> {
        let mut config = Config::default();
        match doc {
            Yaml::Hash(_) | Yaml::Null => {},
            _ => return Err(Error::Config("top level must be a mapping".to_string())),
        }

        let patrol = _section(doc, "patrol")?;
        _set_path(&mut config.patrol.input, patrol, "patrol.input")?;

        let race = _section(doc, "race")?;
        _set_path(&mut config.race.input, race, "race.input")?;
        _set_int(&mut config.race.min_savings, &race["min_savings"], "race.min_savings")?;
        _set_int(&mut config.race.short_budget, &race["short_budget"], "race.short_budget")?;
        _set_int(&mut config.race.long_budget, &race["long_budget"], "race.long_budget")?;

        let ram_run = _section(doc, "ram_run")?;
        _set_path(&mut config.ram_run.input, ram_run, "ram_run.input")?;
        _set_int(&mut config.ram_run.width, &ram_run["width"], "ram_run.width")?;
        _set_int(&mut config.ram_run.height, &ram_run["height"], "ram_run.height")?;
        _set_int(&mut config.ram_run.fallen, &ram_run["fallen"], "ram_run.fallen")?;
        if config.ram_run.width == 0 || config.ram_run.height == 0 {
            return Err(Error::Config("ram_run.width and ram_run.height must be positive".to_string()));
        }

        let print_queue = _section(doc, "print_queue")?;
        _set_path(&mut config.print_queue.input, print_queue, "print_queue.input")?;

        Ok(config)
    }
}

fn _section<'a>(doc: &'a Yaml, name: &str) -> Result<&'a Yaml> {
    let section = &doc[name];
    match section {
        Yaml::Hash(_) | Yaml::Null | Yaml::BadValue => Ok(section),
        other => Err(Error::Config(format!("{} must be a mapping, got {:?}", name, other))),
    }
}

fn _set_path(slot: &mut PathBuf, section: &Yaml, key: &str) -> Result<()> {
    match &section["input"] {
        Yaml::BadValue      => Ok(()),
        Yaml::String(s)     => { *slot = PathBuf::from(s); Ok(()) },
        other => Err(Error::Config(format!("{} must be a string, got {:?}", key, other))),
    }
}

fn _set_int<T: TryFrom<i64>>(slot: &mut T, value: &Yaml, key: &str) -> Result<()> {
    match value {
        Yaml::BadValue   => Ok(()),
        Yaml::Integer(i) => {
            *slot = T::try_from(*i).map_err(|_| Error::Config(format!("{} is out of range: {}", key, i)))?;
            Ok(())
        },
        other => Err(Error::Config(format!("{} must be an integer, got {:?}", key, other))),
    }
}
