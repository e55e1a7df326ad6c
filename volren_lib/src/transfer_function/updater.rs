use log::debug;

use crate::{
    defaults::TRANSFER_FUNCTION_TEXTURE_SIZE,
    gpu::{RenderDevice, TextureId, TextureSize},
    params::{ChangeWatcher, GuiUpdateFlags},
};

use super::{TransferFunction, TransferFunctionTable};

/// Keeps the transfer function texture in sync with the edited function
#[derive(Debug, Default)]
pub struct TransferFunctionTextureUpdater {
    watcher: ChangeWatcher,
}

impl TransferFunctionTextureUpdater {
    pub fn new() -> TransferFunctionTextureUpdater {
        Default::default()
    }

    /// Rebuild and upload the lookup texture if the function changed since the last call.
    /// Returns `true` if the texture was replaced.
    pub fn update<D>(
        &mut self,
        device: &mut D,
        flags: &GuiUpdateFlags,
        transfer_function: &TransferFunction,
    ) -> bool
    where
        D: RenderDevice + ?Sized,
    {
        if !self.watcher.observe(flags.transfer_function_revision()) {
            return false;
        }

        let table = TransferFunctionTable::build(transfer_function.points());
        device.upload_texture(
            TextureId::TransferFunction,
            TextureSize::d1(TRANSFER_FUNCTION_TEXTURE_SIZE as u32),
            table.as_bytes(),
        );
        debug!(
            "Transfer function texture rebuilt from {} points",
            transfer_function.len()
        );
        true
    }

    /// Force a rebuild on the next [`TransferFunctionTextureUpdater::update`]
    pub fn invalidate(&mut self) {
        self.watcher.invalidate();
    }
}
