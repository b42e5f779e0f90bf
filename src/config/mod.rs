use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

fn default_entry_target() -> String {
    "07:20".to_string()
}
fn default_exit_target() -> String {
    "16:20".to_string()
}
fn default_tolerance_min() -> i64 {
    20
}
fn default_data_dir() -> String {
    "data".to_string()
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    /// Target entry time (HH:MM). A badge scanned up to `tolerance_min`
    /// after this time is registered as entrada.
    #[serde(default = "default_entry_target")]
    pub entry_target: String,
    /// Target exit time (HH:MM). A badge scanned from `tolerance_min`
    /// before this time onwards is registered as saída.
    #[serde(default = "default_exit_target")]
    pub exit_target: String,
    #[serde(default = "default_tolerance_min")]
    pub tolerance_min: i64,
    /// Directory holding the per-class roster files (`<codigo_turma>.json`)
    /// and the class-name catalogue.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            entry_target: default_entry_target(),
            exit_target: default_exit_target(),
            tolerance_min: default_tolerance_min(),
            data_dir: default_data_dir(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("presenca")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".presenca")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("presenca.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("presenca.sqlite")
    }

    /// Path of the class-name catalogue inside `data_dir`.
    pub fn class_names_file(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join("turmas-com-disciplinas.json")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).expect("❌ Failed to read configuration file");
            serde_yaml::from_str(&content).expect("❌ Failed to parse configuration file")
        } else {
            Config::default()
        }
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_name {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            dir.join("presenca.sqlite")
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(format!("Failed to serialize config: {e}")))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(())
    }
}
