//! Deployed protocol constants
//!
//! Factory, router, pair init-code hash, and wrapped native token for each
//! chain the pair contracts are deployed on. These seed
//! [`EngineConfig::builtin`](crate::EngineConfig::builtin).

/// Default swap fee numerator for chains that do not set one (0.3% fee, 997
/// of every 1000 input units reach the pool)
pub const DEFAULT_FEE_NUMERATOR: u32 = 997;

/// Default swap fee denominator
pub const DEFAULT_FEE_DENOMINATOR: u32 = 1000;

/// BNB Smart Chain mainnet (chain id 56)
pub mod bsc_mainnet {
    pub const CHAIN_ID: u64 = 56;
    pub const NAME: &str = "bsc-mainnet";
    pub const FACTORY: &str = "0x3b5238312DcBb5ADEdA7470109e60c39CF9ad406";
    pub const ROUTER: &str = "0x827BDb822940198F22FA984c5645a27C60E6Bb5B";
    pub const INIT_CODE_HASH: &str =
        "0xba5060bb7d8f2c95e85e0e8a580390ff7bccccd895254636d87d526c1753fcd3";
    pub const WRAPPED_NATIVE: &str = "0xbb4CdB9CBd36B01bD1cBaEBF2De08d9173bc095c";
    /// Deployed pair contracts keep 0.2% of every input
    pub const FEE_NUMERATOR: u32 = 998;
    pub const FEE_DENOMINATOR: u32 = 1000;
}

/// BNB Smart Chain testnet (chain id 97)
pub mod bsc_testnet {
    pub const CHAIN_ID: u64 = 97;
    pub const NAME: &str = "bsc-testnet";
    pub const FACTORY: &str = "0xCc261efd1946f1810959B2cbbDbD7057d39b0FCa";
    pub const ROUTER: &str = "0x32D6A78deBEC40A8b32A0Cb95Fc60524b14389B0";
    pub const INIT_CODE_HASH: &str =
        "0x825f7bd3f5deccab4ef9adb06501a35e8df4a3b46346c6a067612ea19b9696e2";
    pub const WRAPPED_NATIVE: &str = "0xd66c6B4F0be8CE5b39D52E0Fd1344c389929B378";
    pub const FEE_NUMERATOR: u32 = 998;
    pub const FEE_DENOMINATOR: u32 = 1000;
}

/// Wrapped native token metadata shared by both BNB Smart Chain networks
pub mod wrapped_bnb {
    pub const SYMBOL: &str = "WBNB";
    pub const NAME: &str = "Wrapped BNB";
    pub const DECIMALS: u8 = 18;
}
