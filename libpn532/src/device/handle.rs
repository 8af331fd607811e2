// libpn532-rs/libpn532/src/device/handle.rs

use std::marker::PhantomData;
use std::time::Duration;

use log::debug;

use crate::constants::{COMMAND_TIMEOUT, PASSIVE_TARGET_RESPONSE_LEN, STARTUP_DELAY};
use crate::device::link::Link;
use crate::protocol::codec;
use crate::protocol::commands::sam::{SAM_DEFAULT_TIMEOUT, SAM_MODE_NORMAL};
use crate::protocol::responses::{
    ExchangeResponse, decode_data_exchange, decode_firmware_version, decode_passive_target,
};
use crate::protocol::{Command, Response};
use crate::transport::Transport;
use crate::types::{CardType, FirmwareVersion, PassiveTarget, Uid};
use crate::utils::{Delay, StdDelay};
use crate::Result;

/// Type-state markers
pub struct Uninitialized;
pub struct Initialized;

/// Device handle that enforces initialization state at compile time.
pub struct Device<State = Uninitialized> {
    link: Link,
    _state: PhantomData<State>,
}

impl Device<Uninitialized> {
    /// Create a Device from a transport and a delay source.
    pub fn new(transport: Box<dyn Transport>, delay: Box<dyn Delay>) -> Self {
        Self {
            link: Link::new(transport, delay),
            _state: PhantomData,
        }
    }

    /// Create a Device that sleeps on the calling thread.
    pub fn new_with_transport(transport: Box<dyn Transport>) -> Self {
        Self::new(transport, Box::new(StdDelay))
    }

    /// Wait for the chip to come up and run SAMConfiguration (normal mode,
    /// 1 s virtual card timeout, IRQ enabled). Returns an initialized
    /// Device on success.
    pub fn initialize(mut self) -> Result<Device<Initialized>> {
        self.link.delay(STARTUP_DELAY);

        let cmd = Command::SamConfiguration {
            mode: SAM_MODE_NORMAL,
            timeout: SAM_DEFAULT_TIMEOUT,
            use_irq: true,
        };
        self.run(&cmd, COMMAND_TIMEOUT)?;
        debug!("SAM configured");

        Ok(Device {
            link: self.link,
            _state: PhantomData,
        })
    }
}

impl<State> Device<State> {
    /// Query IC/Ver/Rev/Support. Works before initialization, which makes
    /// it a convenient presence check.
    pub fn firmware_version(&mut self) -> Result<FirmwareVersion> {
        let cmd = Command::GetFirmwareVersion;
        let raw = self
            .link
            .exchange(&cmd.encode(), cmd.response_len(), COMMAND_TIMEOUT)?;
        let version = decode_firmware_version(&raw)?;
        debug!("{}", version);
        Ok(version)
    }

    fn run(&mut self, cmd: &Command, timeout: Duration) -> Result<Response> {
        let raw = self
            .link
            .exchange(&cmd.encode(), cmd.response_len(), timeout)?;
        codec::decode_response_frame(cmd.command_code(), &raw)
    }
}

impl Device<Initialized> {
    /// Execute a command and return the parsed Response.
    pub fn execute(&mut self, cmd: Command, timeout: Duration) -> Result<Response> {
        self.run(&cmd, timeout)
    }

    /// Send a command and wait for its ACK and ready signal without
    /// reading the response.
    pub fn send_command(&mut self, cmd: &Command, timeout: Duration) -> Result<()> {
        self.link.send_command_check_ack(&cmd.encode(), timeout)
    }

    /// Read `len` bytes of response buffer.
    pub fn read_response(&mut self, len: usize) -> Result<Vec<u8>> {
        self.link.read_response(len)
    }

    /// Wait for a single target of `card_type` and return it.
    /// `timeout` of zero waits until a card is presented.
    pub fn read_passive_target(
        &mut self,
        card_type: CardType,
        timeout: Duration,
    ) -> Result<PassiveTarget> {
        let cmd = Command::InListPassiveTarget {
            max_targets: 1,
            card_type,
        };
        self.send_command(&cmd, timeout)?;
        self.read_detected_passive_target(card_type)
    }

    /// Like [`Device::read_passive_target`] but only the UID.
    pub fn read_passive_target_id(&mut self, card_type: CardType, timeout: Duration) -> Result<Uid> {
        Ok(self.read_passive_target(card_type, timeout)?.uid)
    }

    /// Read the target reported by an InListPassiveTarget for
    /// `card_type` whose ready signal has already been observed.
    pub fn read_detected_passive_target(&mut self, card_type: CardType) -> Result<PassiveTarget> {
        let raw = self.link.read_response(PASSIVE_TARGET_RESPONSE_LEN)?;
        let target = decode_passive_target(&raw, card_type)?;
        debug!(
            "target {} uid={} sens_res={:#06x} sel_res={:#04x}",
            target.target_number,
            target.uid.to_hex(),
            target.sens_res,
            target.sel_res
        );
        Ok(target)
    }

    /// InDataExchange with the current target. `cmd` must be a
    /// `Command::InDataExchange`.
    pub fn data_exchange(&mut self, cmd: &Command, timeout: Duration) -> Result<ExchangeResponse> {
        self.data_exchange_with_hold(cmd, timeout, Duration::ZERO)
    }

    /// InDataExchange that waits `hold` between the ready signal and
    /// reading the response.
    pub fn data_exchange_with_hold(
        &mut self,
        cmd: &Command,
        timeout: Duration,
        hold: Duration,
    ) -> Result<ExchangeResponse> {
        self.send_command(cmd, timeout)?;
        if !hold.is_zero() {
            self.link.delay(hold);
        }
        let raw = self.link.read_response(cmd.response_len())?;
        decode_data_exchange(&raw)
    }
}
