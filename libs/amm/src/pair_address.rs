//! Canonical pair addressing
//!
//! A pair's address is a pure function of its factory, the canonically
//! ordered token addresses, and the pair init-code hash (CREATE2). Derived
//! addresses are memoized in a [`PairAddressCache`]; concurrent first lookups
//! for the same key may both compute, and both store the same value.

use crate::error::{PoolError, PoolResult};
use dashmap::DashMap;
use once_cell::sync::Lazy;
use pair_config::{ChainConfig, EngineConfig, SwapFee};
use pair_types::{keccak256, Address, ChainId, Hash32, Token};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

static GLOBAL_CACHE: Lazy<Arc<PairAddressCache>> = Lazy::new(|| Arc::new(PairAddressCache::new()));

/// CREATE2 address of the pair for two already-ordered token addresses
pub fn compute_pair_address(
    factory: &Address,
    init_code_hash: &Hash32,
    token0: &Address,
    token1: &Address,
) -> Address {
    let mut packed = [0u8; 40];
    packed[..20].copy_from_slice(token0.as_bytes());
    packed[20..].copy_from_slice(token1.as_bytes());
    factory.create2(&keccak256(packed), init_code_hash)
}

/// Cache key: chain plus canonically ordered token addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PairKey {
    pub chain_id: ChainId,
    pub token0: Address,
    pub token1: Address,
}

impl PairKey {
    /// Key for two tokens in either order
    pub fn new(token_a: &Token, token_b: &Token) -> PoolResult<Self> {
        let (token0, token1) = token_a.sort_pair(token_b)?;
        Ok(Self {
            chain_id: token0.chain_id,
            token0: token0.address,
            token1: token1.address,
        })
    }
}

/// Concurrency-safe memo of derived pair addresses. Entries never expire.
#[derive(Debug, Default)]
pub struct PairAddressCache {
    entries: DashMap<PairKey, Address>,
}

impl PairAddressCache {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Process-wide instance shared by resolvers built with [`PairAddressResolver::new`]
    pub fn global() -> Arc<PairAddressCache> {
        Arc::clone(&GLOBAL_CACHE)
    }

    pub fn get(&self, key: &PairKey) -> Option<Address> {
        self.entries.get(key).map(|entry| *entry.value())
    }

    /// Cached address for `key`, computing and storing it on a miss
    pub fn get_or_compute<F>(&self, key: PairKey, compute: F) -> Address
    where
        F: FnOnce() -> Address,
    {
        if let Some(address) = self.get(&key) {
            return address;
        }

        // Computed outside the shard lock; a racing insert stores the same value
        let address = compute();
        debug!(
            chain_id = %key.chain_id,
            token0 = %key.token0,
            token1 = %key.token1,
            pair = %address,
            "Pair address cache miss"
        );
        *self.entries.entry(key).or_insert(address)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Resolves pair addresses and swap fees from per-chain configuration
#[derive(Debug, Clone)]
pub struct PairAddressResolver {
    chains: HashMap<ChainId, ChainConfig>,
    cache: Arc<PairAddressCache>,
}

impl PairAddressResolver {
    /// Resolver backed by the process-wide cache
    pub fn new(config: &EngineConfig) -> Self {
        Self::with_cache(config, PairAddressCache::global())
    }

    /// Resolver backed by a caller-owned cache
    pub fn with_cache(config: &EngineConfig, cache: Arc<PairAddressCache>) -> Self {
        let chains = config
            .chains
            .iter()
            .map(|chain| (chain.chain_id, chain.clone()))
            .collect();
        Self { chains, cache }
    }

    pub fn chain(&self, chain_id: ChainId) -> PoolResult<&ChainConfig> {
        self.chains
            .get(&chain_id)
            .ok_or(PoolError::UnsupportedChain { chain_id })
    }

    pub fn fee(&self, chain_id: ChainId) -> PoolResult<SwapFee> {
        Ok(self.chain(chain_id)?.fee)
    }

    pub fn cache(&self) -> &Arc<PairAddressCache> {
        &self.cache
    }

    /// Address of the pair for two tokens, in either order
    pub fn pair_address(&self, token_a: &Token, token_b: &Token) -> PoolResult<Address> {
        let key = PairKey::new(token_a, token_b)?;
        if let Some(address) = self.cache.get(&key) {
            return Ok(address);
        }
        let chain = self.chain(key.chain_id)?;
        Ok(self.cache.get_or_compute(key, || {
            compute_pair_address(&chain.factory, &chain.init_code_hash, &key.token0, &key.token1)
        }))
    }
}

/// Every pair formed by two distinct tokens in `tokens`, keyed by pair address.
///
/// Values hold the tokens in canonical order.
pub fn all_pair_addresses(
    resolver: &PairAddressResolver,
    tokens: &[Token],
) -> PoolResult<HashMap<Address, (Token, Token)>> {
    let mut pairs = HashMap::new();
    for (i, token_a) in tokens.iter().enumerate() {
        for token_b in &tokens[i + 1..] {
            if token_a.address == token_b.address {
                continue;
            }
            let address = resolver.pair_address(token_a, token_b)?;
            let (token0, token1) = token_a.sort_pair(token_b)?;
            pairs.insert(address, (token0.clone(), token1.clone()));
        }
    }
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Uniswap V2 mainnet factory and init code hash, with its published
    // DAI/WETH pair address as the expected derivation
    const FACTORY: &str = "0x5C69bEe701ef814a2B6a3EDD4B1652CB9cc5aA6f";
    const INIT_CODE_HASH: &str =
        "0x96e8ac4277198ff8b6f785478aa9a39f403cb768dd02cbee326c3e7da348845f";
    const DAI: &str = "0x6B175474E89094C44Da98b954EedeAC495271d0F";
    const WETH: &str = "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2";
    const DAI_WETH_PAIR: &str = "0xA478c2975Ab1Ea89e8196811F51A7B7Ade33eB11";

    fn mainnet_config() -> EngineConfig {
        EngineConfig::from_toml_str(&format!(
            "[[chains]]\nchain_id = 1\nname = \"mainnet\"\nfactory = \"{}\"\ninit_code_hash = \"{}\"\n",
            FACTORY, INIT_CODE_HASH
        ))
        .unwrap()
    }

    fn token(chain: u64, address: &str) -> Token {
        Token::parse(ChainId(chain), address, 18, None, None).unwrap()
    }

    #[test]
    fn test_compute_known_pair_address() {
        let address = compute_pair_address(
            &FACTORY.parse().unwrap(),
            &INIT_CODE_HASH.parse().unwrap(),
            &DAI.parse().unwrap(),
            &WETH.parse().unwrap(),
        );
        assert_eq!(address.to_string(), DAI_WETH_PAIR);
    }

    #[test]
    fn test_resolver_is_order_independent() {
        let resolver = PairAddressResolver::with_cache(&mainnet_config(), Arc::new(PairAddressCache::new()));
        let dai = token(1, DAI);
        let weth = token(1, WETH);
        let forward = resolver.pair_address(&dai, &weth).unwrap();
        let backward = resolver.pair_address(&weth, &dai).unwrap();
        assert_eq!(forward, backward);
        assert_eq!(forward.to_string(), DAI_WETH_PAIR);
        assert_eq!(resolver.cache().len(), 1);
    }

    #[test]
    fn test_cache_hit_skips_computation() {
        let cache = PairAddressCache::new();
        let key = PairKey::new(&token(1, DAI), &token(1, WETH)).unwrap();
        let first = cache.get_or_compute(key, || Address::new([7u8; 20]));
        let second = cache.get_or_compute(key, || panic!("cache hit must not recompute"));
        assert_eq!(first, second);
    }

    #[test]
    fn test_cache_key_includes_chain() {
        let cache = PairAddressCache::new();
        let mainnet = PairKey::new(&token(1, DAI), &token(1, WETH)).unwrap();
        let other = PairKey::new(&token(56, DAI), &token(56, WETH)).unwrap();
        cache.get_or_compute(mainnet, || Address::new([1u8; 20]));
        cache.get_or_compute(other, || Address::new([2u8; 20]));
        assert_eq!(cache.len(), 2);
        assert_ne!(cache.get(&mainnet), cache.get(&other));
    }

    #[test]
    fn test_unsupported_chain() {
        let resolver = PairAddressResolver::with_cache(&mainnet_config(), Arc::new(PairAddressCache::new()));
        assert!(matches!(
            resolver.pair_address(&token(5, DAI), &token(5, WETH)),
            Err(PoolError::UnsupportedChain { chain_id }) if chain_id == ChainId(5)
        ));
    }

    #[test]
    fn test_pair_key_rejects_invalid_pairs() {
        assert!(matches!(
            PairKey::new(&token(1, DAI), &token(1, DAI)),
            Err(PoolError::DuplicateAsset { .. })
        ));
        assert!(matches!(
            PairKey::new(&token(1, DAI), &token(56, WETH)),
            Err(PoolError::ChainMismatch { .. })
        ));
    }

    #[test]
    fn test_all_pair_addresses() {
        let resolver = PairAddressResolver::with_cache(&mainnet_config(), Arc::new(PairAddressCache::new()));
        let usdc = token(1, "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48");
        let tokens = vec![token(1, DAI), token(1, WETH), usdc, token(1, DAI)];
        let pairs = all_pair_addresses(&resolver, &tokens).unwrap();
        assert_eq!(pairs.len(), 3);

        let (token0, token1) = &pairs[&DAI_WETH_PAIR.parse::<Address>().unwrap()];
        assert_eq!(token0, &token(1, DAI));
        assert_eq!(token1, &token(1, WETH));
    }
}
