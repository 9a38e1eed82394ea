multiversx_sc::imports!();

/// Organization epoch clock.
///
/// Epochs are counted from the block epoch at which the contract was
/// deployed, so the first epoch of the organization is always 0. The
/// protocol is the only authority that advances it.
#[multiversx_sc::module]
pub trait EpochModule {
    fn init_epoch_clock(&self) {
        let block_epoch = self.blockchain().get_block_epoch();
        self.genesis_epoch().set_if_empty(block_epoch);
    }

    /// Epochs elapsed since deployment; the deploy epoch is epoch 0.
    #[view(getCurrentEpoch)]
    fn current_epoch(&self) -> u64 {
        self.blockchain()
            .get_block_epoch()
            .saturating_sub(self.genesis_epoch().get())
    }

    #[view(getGenesisEpoch)]
    #[storage_mapper("genesisEpoch")]
    fn genesis_epoch(&self) -> SingleValueMapper<u64>;
}
