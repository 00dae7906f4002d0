//! Engine Configuration Module
//!
//! Provides per-chain configuration for the pair engine: factory identity,
//! pair init-code hash, router, wrapped native token, and swap fee.
//! Supports loading from TOML files with environment-specific overrides.

use crate::protocol::{
    bsc_mainnet, bsc_testnet, wrapped_bnb, DEFAULT_FEE_DENOMINATOR, DEFAULT_FEE_NUMERATOR,
};
use anyhow::{bail, ensure, Context, Result};
use config_crate::{Config, Environment, File};
use pair_types::{Address, ChainId, Hash32, Token};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Swap fee kept by the pool, as `numerator / denominator` of the input
///
/// Only constructed through [`SwapFee::new`] (or deserialized through the same
/// check), so every value satisfies `0 < numerator <= denominator`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "SwapFeeParts")]
pub struct SwapFee {
    numerator: u32,
    denominator: u32,
}

#[derive(Deserialize)]
struct SwapFeeParts {
    numerator: u32,
    denominator: u32,
}

impl TryFrom<SwapFeeParts> for SwapFee {
    type Error = anyhow::Error;

    fn try_from(parts: SwapFeeParts) -> Result<Self> {
        Self::new(parts.numerator, parts.denominator)
    }
}

impl Default for SwapFee {
    fn default() -> Self {
        Self {
            numerator: DEFAULT_FEE_NUMERATOR,
            denominator: DEFAULT_FEE_DENOMINATOR,
        }
    }
}

impl SwapFee {
    pub fn new(numerator: u32, denominator: u32) -> Result<Self> {
        let fee = Self {
            numerator,
            denominator,
        };
        fee.validate()?;
        Ok(fee)
    }

    /// Share of the input that reaches the pool, numerator part
    pub fn numerator(&self) -> u32 {
        self.numerator
    }

    pub fn denominator(&self) -> u32 {
        self.denominator
    }

    /// Requires `0 < numerator <= denominator`
    pub fn validate(&self) -> Result<()> {
        ensure!(self.numerator > 0, "swap fee numerator must be positive");
        ensure!(
            self.numerator <= self.denominator,
            "swap fee numerator {} exceeds denominator {}",
            self.numerator,
            self.denominator
        );
        Ok(())
    }
}

/// Wrapped native token as written in configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrappedNativeConfig {
    pub address: Address,
    pub symbol: String,
    pub name: String,
    #[serde(default = "default_native_decimals")]
    pub decimals: u8,
}

fn default_native_decimals() -> u8 {
    wrapped_bnb::DECIMALS
}

/// Deployment constants for one chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainConfig {
    pub chain_id: ChainId,
    pub name: String,
    pub factory: Address,
    pub init_code_hash: Hash32,
    pub router: Option<Address>,
    pub wrapped_native: Option<WrappedNativeConfig>,
    #[serde(default)]
    pub fee: SwapFee,
}

impl ChainConfig {
    /// Wrapped native token scoped to this chain
    pub fn wrapped_native_token(&self) -> Option<Token> {
        self.wrapped_native.as_ref().map(|wrapped| {
            Token::new(
                self.chain_id,
                wrapped.address,
                wrapped.decimals,
                Some(&wrapped.symbol),
                Some(&wrapped.name),
            )
        })
    }

    fn from_constants(
        chain_id: u64,
        name: &str,
        factory: &str,
        router: &str,
        init_code_hash: &str,
        wrapped_native: &str,
        fee: (u32, u32),
    ) -> Result<Self> {
        Ok(Self {
            chain_id: ChainId(chain_id),
            name: name.to_string(),
            factory: factory
                .parse()
                .with_context(|| format!("Invalid factory address for {}", name))?,
            init_code_hash: init_code_hash
                .parse()
                .with_context(|| format!("Invalid init code hash for {}", name))?,
            router: Some(
                router
                    .parse()
                    .with_context(|| format!("Invalid router address for {}", name))?,
            ),
            wrapped_native: Some(WrappedNativeConfig {
                address: wrapped_native
                    .parse()
                    .with_context(|| format!("Invalid wrapped native address for {}", name))?,
                symbol: wrapped_bnb::SYMBOL.to_string(),
                name: wrapped_bnb::NAME.to_string(),
                decimals: wrapped_bnb::DECIMALS,
            }),
            fee: SwapFee::new(fee.0, fee.1)
                .with_context(|| format!("Invalid swap fee for {}", name))?,
        })
    }
}

/// Main engine configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub chains: Vec<ChainConfig>,
}

impl EngineConfig {
    /// Built-in deployments for BNB Smart Chain mainnet and testnet
    pub fn builtin() -> Result<Self> {
        let chains = vec![
            ChainConfig::from_constants(
                bsc_mainnet::CHAIN_ID,
                bsc_mainnet::NAME,
                bsc_mainnet::FACTORY,
                bsc_mainnet::ROUTER,
                bsc_mainnet::INIT_CODE_HASH,
                bsc_mainnet::WRAPPED_NATIVE,
                (bsc_mainnet::FEE_NUMERATOR, bsc_mainnet::FEE_DENOMINATOR),
            )?,
            ChainConfig::from_constants(
                bsc_testnet::CHAIN_ID,
                bsc_testnet::NAME,
                bsc_testnet::FACTORY,
                bsc_testnet::ROUTER,
                bsc_testnet::INIT_CODE_HASH,
                bsc_testnet::WRAPPED_NATIVE,
                (bsc_testnet::FEE_NUMERATOR, bsc_testnet::FEE_DENOMINATOR),
            )?,
        ];
        Ok(Self { chains })
    }

    /// Load configuration from files with environment overrides
    pub fn load(base_path: Option<&Path>, environment: Option<&str>) -> Result<Self> {
        let base = base_path.unwrap_or(Path::new("config/pairs.toml"));

        let mut builder = Config::builder().add_source(File::from(base).required(true));

        // Add environment-specific overrides if specified
        if let Some(env) = environment {
            let env_file = base
                .parent()
                .unwrap_or(Path::new("config"))
                .join("environments")
                .join(format!("{}.toml", env));

            if env_file.exists() {
                info!("Loading environment config: {:?}", env_file);
                builder = builder.add_source(File::from(env_file));
            } else {
                warn!("Environment config not found: {:?}", env_file);
            }
        }

        // Override with environment variables (PAIR_ prefix)
        builder = builder.add_source(
            Environment::with_prefix("PAIR")
                .separator("__")
                .try_parsing(true),
        );

        let config: Self = builder
            .build()
            .context("Failed to build configuration")?
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        config.validate()?;
        info!("Loaded {} chain configuration(s) from {:?}", config.chains.len(), base);
        Ok(config)
    }

    /// Parse configuration from a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse TOML configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Check fees and reject duplicate chain entries
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for chain in &self.chains {
            if !seen.insert(chain.chain_id) {
                bail!("Duplicate configuration for chain {}", chain.chain_id);
            }
            chain
                .fee
                .validate()
                .with_context(|| format!("Invalid fee for chain {}", chain.name))?;
            debug!(
                chain_id = %chain.chain_id,
                factory = %chain.factory,
                "Validated chain configuration"
            );
        }
        Ok(())
    }

    /// Get settings for a specific chain
    pub fn chain(&self, chain_id: ChainId) -> Option<&ChainConfig> {
        self.chains.iter().find(|chain| chain.chain_id == chain_id)
    }

    /// Configuration file locations checked by [`load_config`]
    pub fn default_path() -> PathBuf {
        PathBuf::from("config/pairs.toml")
    }
}

/// Convenience function to load configuration, falling back to the built-in
/// deployments when no configuration file exists
pub fn load_config(environment: Option<&str>) -> Result<EngineConfig> {
    let path = EngineConfig::default_path();
    if !path.exists() {
        warn!("No configuration at {:?}, using built-in deployments", path);
        return EngineConfig::builtin();
    }
    EngineConfig::load(Some(&path), environment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const CUSTOM_CHAIN: &str = r#"
[[chains]]
chain_id = 1337
name = "devnet"
factory = "0x5c69bee701ef814a2b6a3edd4b1652cb9cc5aa6f"
init_code_hash = "0x96e8ac4277198ff8b6f785478aa9a39f403cb768dd02cbee326c3e7da348845f"

[chains.fee]
numerator = 998
denominator = 1000
"#;

    #[test]
    fn test_builtin_chains() {
        let config = EngineConfig::builtin().unwrap();
        let mainnet = config.chain(ChainId::BSC_MAINNET).unwrap();
        assert_eq!(mainnet.fee, SwapFee::new(998, 1000).unwrap());
        assert_ne!(mainnet.fee, SwapFee::default());
        assert_eq!(
            mainnet.factory.to_string(),
            "0x3b5238312DcBb5ADEdA7470109e60c39CF9ad406"
        );
        let wbnb = mainnet.wrapped_native_token().unwrap();
        assert_eq!(wbnb.symbol.as_deref(), Some("WBNB"));
        assert_eq!(wbnb.chain_id, ChainId::BSC_MAINNET);
        assert!(config.chain(ChainId::BSC_TESTNET).is_some());
        assert!(config.chain(ChainId(1)).is_none());
    }

    #[test]
    fn test_from_toml_str() {
        let config = EngineConfig::from_toml_str(CUSTOM_CHAIN).unwrap();
        let chain = config.chain(ChainId(1337)).unwrap();
        assert_eq!(chain.fee, SwapFee::new(998, 1000).unwrap());
        assert!(chain.router.is_none());
        assert!(chain.wrapped_native_token().is_none());
    }

    #[test]
    fn test_fee_defaults_when_omitted() {
        let content = r#"
[[chains]]
chain_id = 1
name = "mainnet"
factory = "0x5c69bee701ef814a2b6a3edd4b1652cb9cc5aa6f"
init_code_hash = "0x96e8ac4277198ff8b6f785478aa9a39f403cb768dd02cbee326c3e7da348845f"
"#;
        let config = EngineConfig::from_toml_str(content).unwrap();
        assert_eq!(config.chains[0].fee, SwapFee::default());
    }

    #[test]
    fn test_invalid_fee_rejected() {
        assert!(SwapFee::new(0, 1000).is_err());
        assert!(SwapFee::new(1001, 1000).is_err());
        let bad = CUSTOM_CHAIN.replace("numerator = 998", "numerator = 2000");
        assert!(EngineConfig::from_toml_str(&bad).is_err());
        let zero = CUSTOM_CHAIN.replace("numerator = 998", "numerator = 0");
        assert!(EngineConfig::from_toml_str(&zero).is_err());
    }

    #[test]
    fn test_fee_deserialization_checks_bounds() {
        let fee: SwapFee = toml::from_str("numerator = 9975\ndenominator = 10000").unwrap();
        assert_eq!((fee.numerator(), fee.denominator()), (9975, 10000));
        assert!(toml::from_str::<SwapFee>("numerator = 0\ndenominator = 1000").is_err());
        assert!(toml::from_str::<SwapFee>("numerator = 1\ndenominator = 0").is_err());
    }

    #[test]
    fn test_shipped_file_matches_builtin() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config/pairs.toml");
        let shipped = EngineConfig::load(Some(&path), None).unwrap();
        assert_eq!(shipped, EngineConfig::builtin().unwrap());
    }

    #[test]
    fn test_duplicate_chain_rejected() {
        let doubled = format!("{}\n{}", CUSTOM_CHAIN, CUSTOM_CHAIN);
        assert!(EngineConfig::from_toml_str(&doubled).is_err());
    }

    #[test]
    fn test_load_from_file_with_environment_override() {
        let dir = tempdir().unwrap();
        let base = dir.path().join("pairs.toml");
        fs::write(&base, CUSTOM_CHAIN).unwrap();

        let env_dir = dir.path().join("environments");
        fs::create_dir_all(&env_dir).unwrap();
        fs::write(
            env_dir.join("staging.toml"),
            CUSTOM_CHAIN.replace("devnet", "staging-devnet"),
        )
        .unwrap();

        let config = EngineConfig::load(Some(&base), None).unwrap();
        assert_eq!(config.chains[0].name, "devnet");

        let staged = EngineConfig::load(Some(&base), Some("staging")).unwrap();
        assert_eq!(staged.chains[0].name, "staging-devnet");

        let missing_env = EngineConfig::load(Some(&base), Some("absent")).unwrap();
        assert_eq!(missing_env.chains[0].name, "devnet");
    }
}
