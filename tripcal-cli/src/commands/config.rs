use anyhow::Result;

use crate::config::TripcalConfig;

pub fn run() -> Result<()> {
    let path = TripcalConfig::config_path()?;

    if path.exists() {
        println!("{}", path.display());
    } else {
        TripcalConfig::create_default_config(&path)?;
        println!("Created {}", path.display());
    }

    Ok(())
}
