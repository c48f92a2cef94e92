//! MAX30205 driver core.
//! Blocking API over `embedded-hal`; the `async` feature adds an `_async` mirror of every operation.
//!
//! The handle moves through `Uninitialized -> Idle <-> ContinuousReading` and back to
//! `Uninitialized` on [`Max30205::deinit`] or an address change. `init` lands in whichever of
//! `Idle`/`ContinuousReading` matches the probed SHUTDOWN bit. Register operations outside `Idle` or
//! `ContinuousReading` fail with [`Error::NotInitialized`].

use crate::data_types::{
    AddressPins, BusTimeout, ChipInfo, Config, DataFormat, DeviceState, FaultQueue, InterruptMode,
    PinPolarity, Reading, CHIP_INFO,
};
use crate::error::Error;
use crate::registers::{
    addr, celsius_to_raw, raw_to_celsius, ConfigBits, CONVERSION_TIME_MS, DEFAULT_I2C_ADDRESS,
    FAULT_QUEUE_MASK, FAULT_QUEUE_SHIFT,
};

/// Largest burst accepted by the raw write helper (pointer byte + 7 data bytes).
const WRITE_BUF_LEN: usize = 8;

/// MAX30205 temperature sensor handle.
pub struct Max30205<I2C, D> {
    i2c: I2C,
    delay: D,
    pins: AddressPins,
    address: u8,
    config: ConfigBits,
    state: DeviceState,
}

impl<I2C, D> Max30205<I2C, D> {
    /// Create an uninitialized driver with A2/A1/A0 tied to GND (0x48).
    pub fn new(i2c: I2C, delay: D) -> Self {
        Self {
            i2c,
            delay,
            pins: AddressPins::default(),
            address: DEFAULT_I2C_ADDRESS,
            config: ConfigBits::empty(),
            state: DeviceState::Uninitialized,
        }
    }

    /// Chip description (name, supply and temperature ranges, driver version).
    pub fn info() -> ChipInfo {
        CHIP_INFO
    }

    /// Return the 7-bit I2C address configured for this instance.
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Address-pin strapping the current address was derived from.
    pub fn get_addr_pin(&self) -> AddressPins {
        self.pins
    }

    /// Current lifecycle state.
    pub fn state(&self) -> DeviceState {
        self.state
    }

    /// Last CONFIG value seen on the bus, decoded.
    pub fn config(&self) -> Config {
        Config::from_bits(self.config)
    }

    /// Data format used for conversions, taken from the CONFIG shadow.
    pub fn data_format(&self) -> DataFormat {
        Config::from_bits(self.config).data_format
    }

    /// Release the bus and delay provider.
    pub fn free(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }

    fn probed_state(&self) -> DeviceState {
        if self.config.contains(ConfigBits::SHUTDOWN) {
            DeviceState::Idle
        } else {
            DeviceState::ContinuousReading
        }
    }

    pub(crate) fn reading(&self, buf: [u8; 2]) -> Reading {
        let raw = i16::from_be_bytes(buf);
        Reading {
            raw,
            celsius: raw_to_celsius(raw, self.data_format()),
        }
    }
}

impl<I2C, D> Max30205<I2C, D>
where
    I2C: embedded_hal::i2c::ErrorType,
{
    /// Select the bus address from the A2/A1/A0 strapping.
    /// The handle returns to `Uninitialized`; call `init` to probe the device at the new address.
    pub fn set_addr_pin(&mut self, pins: AddressPins) -> Result<(), Error<I2C::Error>> {
        let address = pins.address().ok_or(Error::InvalidConfig)?;
        self.pins = pins;
        self.address = address;
        self.config = ConfigBits::empty();
        self.state = DeviceState::Uninitialized;
        Ok(())
    }

    fn ensure_initialized(&self) -> Result<(), Error<I2C::Error>> {
        match self.state {
            DeviceState::Uninitialized => Err(Error::NotInitialized),
            DeviceState::Idle | DeviceState::ContinuousReading => Ok(()),
        }
    }

    /// Decode a register code with the active data format. Requires `init`.
    pub fn convert_to_data(&self, raw: i16) -> Result<f32, Error<I2C::Error>> {
        self.ensure_initialized()?;
        Ok(raw_to_celsius(raw, self.data_format()))
    }

    /// Encode °C with the active data format. Requires `init`.
    pub fn convert_to_register(&self, celsius: f32) -> Result<i16, Error<I2C::Error>> {
        self.ensure_initialized()?;
        celsius_to_raw(celsius, self.data_format()).ok_or(Error::OutOfRange)
    }

    fn encode_threshold(&self, celsius: f32) -> Result<i16, Error<I2C::Error>> {
        celsius_to_raw(celsius, self.data_format()).ok_or_else(|| {
            warn!("max30205: threshold {} C not representable", celsius);
            Error::OutOfRange
        })
    }
}

impl<I2C, D> Max30205<I2C, D>
where
    I2C: embedded_hal::i2c::I2c,
    D: embedded_hal::delay::DelayNs,
{
    /// Probe the device by reading CONFIG. The state follows the probed SHUTDOWN bit: a device
    /// that is already converting (power-on default) reports `ContinuousReading`.
    /// A NACK surfaces as [`Error::I2c`].
    pub fn init(&mut self) -> Result<(), Error<I2C::Error>> {
        let conf = self.read_reg(addr::CONFIG).inspect_err(|_| {
            warn!("max30205: probe at {=u8:#x} failed", self.address);
        })?;
        self.config = ConfigBits::from_bits_retain(conf);
        self.state = self.probed_state();
        debug!("max30205: init at {=u8:#x}, config {=u8:#x}", self.address, conf);
        Ok(())
    }

    /// Put the device into shutdown and return to `Uninitialized`. No-op when already uninitialized.
    pub fn deinit(&mut self) -> Result<(), Error<I2C::Error>> {
        if self.state == DeviceState::Uninitialized {
            return Ok(());
        }
        self.update_config(ConfigBits::SHUTDOWN, ConfigBits::SHUTDOWN)
            .inspect_err(|_| warn!("max30205: power down failed"))?;
        self.state = DeviceState::Uninitialized;
        Ok(())
    }

    /// Enter shutdown without releasing the handle.
    pub fn power_down(&mut self) -> Result<(), Error<I2C::Error>> {
        self.ensure_initialized()?;
        self.update_config(ConfigBits::SHUTDOWN, ConfigBits::SHUTDOWN)
            .inspect_err(|_| warn!("max30205: power down failed"))?;
        self.state = DeviceState::Idle;
        Ok(())
    }

    /// Trigger a one-shot conversion, wait for it and return the result. Leaves the device shut down.
    pub fn single_read(&mut self) -> Result<Reading, Error<I2C::Error>> {
        self.ensure_initialized()?;
        let bits = ConfigBits::SHUTDOWN | ConfigBits::ONE_SHOT;
        self.update_config(bits, bits)
            .inspect_err(|_| warn!("max30205: one-shot trigger failed"))?;
        self.state = DeviceState::Idle;
        self.delay.delay_ms(CONVERSION_TIME_MS);
        let mut buf = [0u8; 2];
        self.read_regs(addr::TEMP, &mut buf)
            .inspect_err(|_| warn!("max30205: read failed"))?;
        // ONE_SHOT self-clears on the device.
        self.config.remove(ConfigBits::ONE_SHOT);
        Ok(self.reading(buf))
    }

    /// Clear SHUTDOWN so the device converts continuously.
    pub fn start_continuous_read(&mut self) -> Result<(), Error<I2C::Error>> {
        self.ensure_initialized()?;
        self.update_config(ConfigBits::SHUTDOWN, ConfigBits::empty())
            .inspect_err(|_| warn!("max30205: start continuous read failed"))?;
        self.state = DeviceState::ContinuousReading;
        Ok(())
    }

    /// Set SHUTDOWN, ending free-running conversion.
    pub fn stop_continuous_read(&mut self) -> Result<(), Error<I2C::Error>> {
        self.ensure_initialized()?;
        self.update_config(ConfigBits::SHUTDOWN, ConfigBits::SHUTDOWN)
            .inspect_err(|_| warn!("max30205: stop continuous read failed"))?;
        self.state = DeviceState::Idle;
        Ok(())
    }

    /// Read the latest conversion result. In `Idle` this is the last completed conversion.
    pub fn continuous_read(&mut self) -> Result<Reading, Error<I2C::Error>> {
        self.ensure_initialized()?;
        let mut buf = [0u8; 2];
        self.read_regs(addr::TEMP, &mut buf)
            .inspect_err(|_| warn!("max30205: read failed"))?;
        Ok(self.reading(buf))
    }

    pub fn set_data_format(&mut self, format: DataFormat) -> Result<(), Error<I2C::Error>> {
        self.ensure_initialized()?;
        let value = match format {
            DataFormat::Normal => ConfigBits::empty(),
            DataFormat::Extended => ConfigBits::DATA_FORMAT,
        };
        self.update_config(ConfigBits::DATA_FORMAT, value)?;
        Ok(())
    }

    pub fn get_data_format(&mut self) -> Result<DataFormat, Error<I2C::Error>> {
        self.ensure_initialized()?;
        Ok(Config::from_bits(self.read_config()?).data_format)
    }

    pub fn set_bus_timeout(&mut self, timeout: BusTimeout) -> Result<(), Error<I2C::Error>> {
        self.ensure_initialized()?;
        let value = match timeout {
            BusTimeout::Enabled => ConfigBits::empty(),
            BusTimeout::Disabled => ConfigBits::TIMEOUT,
        };
        self.update_config(ConfigBits::TIMEOUT, value)?;
        Ok(())
    }

    pub fn get_bus_timeout(&mut self) -> Result<BusTimeout, Error<I2C::Error>> {
        self.ensure_initialized()?;
        Ok(Config::from_bits(self.read_config()?).bus_timeout)
    }

    /// Apply every CONFIG setting in one read-modify-write; SHUTDOWN is preserved.
    pub fn configure(&mut self, config: &Config) -> Result<(), Error<I2C::Error>> {
        self.ensure_initialized()?;
        self.update_config(ConfigBits::SETTINGS, config.to_bits())
            .inspect_err(|_| warn!("max30205: configure failed"))?;
        debug!("max30205: config {=u8:#x}", self.config.bits());
        Ok(())
    }

    pub(crate) fn set_fault_queue_inner(&mut self, queue: FaultQueue) -> Result<(), Error<I2C::Error>> {
        self.ensure_initialized()?;
        let value = ConfigBits::from_bits_retain(queue.field() << FAULT_QUEUE_SHIFT);
        self.update_config(ConfigBits::from_bits_retain(FAULT_QUEUE_MASK), value)?;
        Ok(())
    }

    pub(crate) fn set_interrupt_mode_inner(&mut self, mode: InterruptMode) -> Result<(), Error<I2C::Error>> {
        self.ensure_initialized()?;
        let value = match mode {
            InterruptMode::Comparator => ConfigBits::empty(),
            InterruptMode::Interrupt => ConfigBits::COMP_INT,
        };
        self.update_config(ConfigBits::COMP_INT, value)?;
        Ok(())
    }

    pub(crate) fn set_pin_polarity_inner(&mut self, polarity: PinPolarity) -> Result<(), Error<I2C::Error>> {
        self.ensure_initialized()?;
        let value = match polarity {
            PinPolarity::ActiveLow => ConfigBits::empty(),
            PinPolarity::ActiveHigh => ConfigBits::OS_POLARITY,
        };
        self.update_config(ConfigBits::OS_POLARITY, value)?;
        Ok(())
    }

    pub(crate) fn get_config_inner(&mut self) -> Result<Config, Error<I2C::Error>> {
        self.ensure_initialized()?;
        Ok(Config::from_bits(self.read_config()?))
    }

    pub(crate) fn write_threshold(&mut self, reg: u8, raw: i16) -> Result<(), Error<I2C::Error>> {
        self.ensure_initialized()?;
        self.write_regs(reg, &raw.to_be_bytes())
            .inspect_err(|_| warn!("max30205: threshold write to {=u8:#x} failed", reg))
    }

    pub(crate) fn read_threshold(&mut self, reg: u8) -> Result<i16, Error<I2C::Error>> {
        self.ensure_initialized()?;
        let mut buf = [0u8; 2];
        self.read_regs(reg, &mut buf)
            .inspect_err(|_| warn!("max30205: threshold read from {=u8:#x} failed", reg))?;
        Ok(i16::from_be_bytes(buf))
    }

    pub(crate) fn write_threshold_celsius(&mut self, reg: u8, celsius: f32) -> Result<(), Error<I2C::Error>> {
        self.ensure_initialized()?;
        let raw = self.encode_threshold(celsius)?;
        self.write_threshold(reg, raw)
    }

    pub(crate) fn read_threshold_celsius(&mut self, reg: u8) -> Result<f32, Error<I2C::Error>> {
        let raw = self.read_threshold(reg)?;
        Ok(raw_to_celsius(raw, self.data_format()))
    }

    pub(crate) fn set_reg_inner(&mut self, reg: u8, data: &[u8]) -> Result<(), Error<I2C::Error>> {
        self.ensure_initialized()?;
        self.write_regs(reg, data)
            .inspect_err(|_| warn!("max30205: write to {=u8:#x} failed", reg))?;
        if reg == addr::CONFIG {
            if let Some(&value) = data.first() {
                self.config = ConfigBits::from_bits_retain(value);
            }
        }
        Ok(())
    }

    pub(crate) fn get_reg_inner(&mut self, reg: u8, buf: &mut [u8]) -> Result<(), Error<I2C::Error>> {
        self.ensure_initialized()?;
        self.read_regs(reg, buf)
            .inspect_err(|_| warn!("max30205: read from {=u8:#x} failed", reg))?;
        if reg == addr::CONFIG {
            if let Some(&value) = buf.first() {
                self.config = ConfigBits::from_bits_retain(value);
            }
        }
        Ok(())
    }

    /// Read CONFIG and refresh the shadow.
    fn read_config(&mut self) -> Result<ConfigBits, Error<I2C::Error>> {
        let bits = ConfigBits::from_bits_retain(self.read_reg(addr::CONFIG)?);
        self.config = bits;
        Ok(bits)
    }

    /// Read-modify-write of CONFIG. ONE_SHOT is never carried over from the read value.
    fn update_config(&mut self, mask: ConfigBits, value: ConfigBits) -> Result<ConfigBits, Error<I2C::Error>> {
        let mask = mask | ConfigBits::ONE_SHOT;
        let new = self.update_reg(addr::CONFIG, mask.bits(), value.bits())?;
        self.config = ConfigBits::from_bits_retain(new);
        Ok(self.config)
    }

    fn write_reg(&mut self, reg: u8, value: u8) -> Result<(), Error<I2C::Error>> {
        self.i2c
            .write(self.address, &[reg, value])
            .map_err(Error::I2c)
    }

    fn read_reg(&mut self, reg: u8) -> Result<u8, Error<I2C::Error>> {
        let mut buf = [0u8; 1];
        self.i2c
            .write_read(self.address, &[reg], &mut buf)
            .map_err(Error::I2c)?;
        Ok(buf[0])
    }

    /// Update masked bits in a register (read-modify-write). Returns the value written.
    fn update_reg(&mut self, reg: u8, mask: u8, value: u8) -> Result<u8, Error<I2C::Error>> {
        let cur = self.read_reg(reg)?;
        let new = (cur & !mask) | (value & mask);
        self.write_reg(reg, new)?;
        Ok(new)
    }

    fn write_regs(&mut self, start_reg: u8, data: &[u8]) -> Result<(), Error<I2C::Error>> {
        let mut buf = [0u8; WRITE_BUF_LEN];
        if data.len() + 1 > buf.len() {
            return Err(Error::OutOfRange);
        }
        buf[0] = start_reg;
        buf[1..=data.len()].copy_from_slice(data);
        self.i2c
            .write(self.address, &buf[..=data.len()])
            .map_err(Error::I2c)
    }

    fn read_regs(&mut self, start_reg: u8, data: &mut [u8]) -> Result<(), Error<I2C::Error>> {
        self.i2c
            .write_read(self.address, &[start_reg], data)
            .map_err(Error::I2c)
    }
}

#[cfg(feature = "async")]
impl<I2C, D> Max30205<I2C, D>
where
    I2C: embedded_hal_async::i2c::I2c,
    D: embedded_hal_async::delay::DelayNs,
{
    /// Async version of [`init`](Self::init).
    pub async fn init_async(&mut self) -> Result<(), Error<I2C::Error>> {
        let conf = self.read_reg_async(addr::CONFIG).await.inspect_err(|_| {
            warn!("max30205: probe at {=u8:#x} failed", self.address);
        })?;
        self.config = ConfigBits::from_bits_retain(conf);
        self.state = self.probed_state();
        debug!("max30205: init at {=u8:#x}, config {=u8:#x}", self.address, conf);
        Ok(())
    }

    pub async fn deinit_async(&mut self) -> Result<(), Error<I2C::Error>> {
        if self.state == DeviceState::Uninitialized {
            return Ok(());
        }
        self.update_config_async(ConfigBits::SHUTDOWN, ConfigBits::SHUTDOWN)
            .await
            .inspect_err(|_| warn!("max30205: power down failed"))?;
        self.state = DeviceState::Uninitialized;
        Ok(())
    }

    pub async fn power_down_async(&mut self) -> Result<(), Error<I2C::Error>> {
        self.ensure_initialized()?;
        self.update_config_async(ConfigBits::SHUTDOWN, ConfigBits::SHUTDOWN)
            .await
            .inspect_err(|_| warn!("max30205: power down failed"))?;
        self.state = DeviceState::Idle;
        Ok(())
    }

    pub async fn single_read_async(&mut self) -> Result<Reading, Error<I2C::Error>> {
        self.ensure_initialized()?;
        let bits = ConfigBits::SHUTDOWN | ConfigBits::ONE_SHOT;
        self.update_config_async(bits, bits)
            .await
            .inspect_err(|_| warn!("max30205: one-shot trigger failed"))?;
        self.state = DeviceState::Idle;
        self.delay.delay_ms(CONVERSION_TIME_MS).await;
        let mut buf = [0u8; 2];
        self.read_regs_async(addr::TEMP, &mut buf)
            .await
            .inspect_err(|_| warn!("max30205: read failed"))?;
        self.config.remove(ConfigBits::ONE_SHOT);
        Ok(self.reading(buf))
    }

    pub async fn start_continuous_read_async(&mut self) -> Result<(), Error<I2C::Error>> {
        self.ensure_initialized()?;
        self.update_config_async(ConfigBits::SHUTDOWN, ConfigBits::empty())
            .await
            .inspect_err(|_| warn!("max30205: start continuous read failed"))?;
        self.state = DeviceState::ContinuousReading;
        Ok(())
    }

    pub async fn stop_continuous_read_async(&mut self) -> Result<(), Error<I2C::Error>> {
        self.ensure_initialized()?;
        self.update_config_async(ConfigBits::SHUTDOWN, ConfigBits::SHUTDOWN)
            .await
            .inspect_err(|_| warn!("max30205: stop continuous read failed"))?;
        self.state = DeviceState::Idle;
        Ok(())
    }

    pub async fn continuous_read_async(&mut self) -> Result<Reading, Error<I2C::Error>> {
        self.ensure_initialized()?;
        let mut buf = [0u8; 2];
        self.read_regs_async(addr::TEMP, &mut buf)
            .await
            .inspect_err(|_| warn!("max30205: read failed"))?;
        Ok(self.reading(buf))
    }

    pub async fn set_data_format_async(&mut self, format: DataFormat) -> Result<(), Error<I2C::Error>> {
        self.ensure_initialized()?;
        let value = match format {
            DataFormat::Normal => ConfigBits::empty(),
            DataFormat::Extended => ConfigBits::DATA_FORMAT,
        };
        self.update_config_async(ConfigBits::DATA_FORMAT, value).await?;
        Ok(())
    }

    pub async fn get_data_format_async(&mut self) -> Result<DataFormat, Error<I2C::Error>> {
        Ok(self.get_config_async().await?.data_format)
    }

    pub async fn set_bus_timeout_async(&mut self, timeout: BusTimeout) -> Result<(), Error<I2C::Error>> {
        self.ensure_initialized()?;
        let value = match timeout {
            BusTimeout::Enabled => ConfigBits::empty(),
            BusTimeout::Disabled => ConfigBits::TIMEOUT,
        };
        self.update_config_async(ConfigBits::TIMEOUT, value).await?;
        Ok(())
    }

    pub async fn get_bus_timeout_async(&mut self) -> Result<BusTimeout, Error<I2C::Error>> {
        Ok(self.get_config_async().await?.bus_timeout)
    }

    pub async fn configure_async(&mut self, config: &Config) -> Result<(), Error<I2C::Error>> {
        self.ensure_initialized()?;
        self.update_config_async(ConfigBits::SETTINGS, config.to_bits())
            .await
            .inspect_err(|_| warn!("max30205: configure failed"))?;
        Ok(())
    }

    pub async fn set_fault_queue_async(&mut self, queue: FaultQueue) -> Result<(), Error<I2C::Error>> {
        self.ensure_initialized()?;
        let value = ConfigBits::from_bits_retain(queue.field() << FAULT_QUEUE_SHIFT);
        self.update_config_async(ConfigBits::from_bits_retain(FAULT_QUEUE_MASK), value)
            .await?;
        Ok(())
    }

    pub async fn get_fault_queue_async(&mut self) -> Result<FaultQueue, Error<I2C::Error>> {
        Ok(self.get_config_async().await?.fault_queue)
    }

    pub async fn set_interrupt_mode_async(&mut self, mode: InterruptMode) -> Result<(), Error<I2C::Error>> {
        self.ensure_initialized()?;
        let value = match mode {
            InterruptMode::Comparator => ConfigBits::empty(),
            InterruptMode::Interrupt => ConfigBits::COMP_INT,
        };
        self.update_config_async(ConfigBits::COMP_INT, value).await?;
        Ok(())
    }

    pub async fn get_interrupt_mode_async(&mut self) -> Result<InterruptMode, Error<I2C::Error>> {
        Ok(self.get_config_async().await?.interrupt_mode)
    }

    pub async fn set_pin_polarity_async(&mut self, polarity: PinPolarity) -> Result<(), Error<I2C::Error>> {
        self.ensure_initialized()?;
        let value = match polarity {
            PinPolarity::ActiveLow => ConfigBits::empty(),
            PinPolarity::ActiveHigh => ConfigBits::OS_POLARITY,
        };
        self.update_config_async(ConfigBits::OS_POLARITY, value).await?;
        Ok(())
    }

    pub async fn get_pin_polarity_async(&mut self) -> Result<PinPolarity, Error<I2C::Error>> {
        Ok(self.get_config_async().await?.pin_polarity)
    }

    pub async fn set_interrupt_high_threshold_async(&mut self, celsius: f32) -> Result<(), Error<I2C::Error>> {
        self.ensure_initialized()?;
        let raw = self.encode_threshold(celsius)?;
        self.set_interrupt_high_threshold_raw_async(raw).await
    }

    pub async fn get_interrupt_high_threshold_async(&mut self) -> Result<f32, Error<I2C::Error>> {
        let raw = self.get_interrupt_high_threshold_raw_async().await?;
        Ok(raw_to_celsius(raw, self.data_format()))
    }

    pub async fn set_interrupt_low_threshold_async(&mut self, celsius: f32) -> Result<(), Error<I2C::Error>> {
        self.ensure_initialized()?;
        let raw = self.encode_threshold(celsius)?;
        self.set_interrupt_low_threshold_raw_async(raw).await
    }

    pub async fn get_interrupt_low_threshold_async(&mut self) -> Result<f32, Error<I2C::Error>> {
        let raw = self.get_interrupt_low_threshold_raw_async().await?;
        Ok(raw_to_celsius(raw, self.data_format()))
    }

    pub async fn set_interrupt_high_threshold_raw_async(&mut self, raw: i16) -> Result<(), Error<I2C::Error>> {
        self.set_reg_async(addr::TOS, &raw.to_be_bytes()).await
    }

    pub async fn get_interrupt_high_threshold_raw_async(&mut self) -> Result<i16, Error<I2C::Error>> {
        let mut buf = [0u8; 2];
        self.get_reg_async(addr::TOS, &mut buf).await?;
        Ok(i16::from_be_bytes(buf))
    }

    pub async fn set_interrupt_low_threshold_raw_async(&mut self, raw: i16) -> Result<(), Error<I2C::Error>> {
        self.set_reg_async(addr::THYST, &raw.to_be_bytes()).await
    }

    pub async fn get_interrupt_low_threshold_raw_async(&mut self) -> Result<i16, Error<I2C::Error>> {
        let mut buf = [0u8; 2];
        self.get_reg_async(addr::THYST, &mut buf).await?;
        Ok(i16::from_be_bytes(buf))
    }

    /// Async version of [`RegisterAccess::set_reg`](crate::raw::RegisterAccess::set_reg).
    pub async fn set_reg_async(&mut self, reg: u8, data: &[u8]) -> Result<(), Error<I2C::Error>> {
        self.ensure_initialized()?;
        self.write_regs_async(reg, data)
            .await
            .inspect_err(|_| warn!("max30205: write to {=u8:#x} failed", reg))?;
        if reg == addr::CONFIG {
            if let Some(&value) = data.first() {
                self.config = ConfigBits::from_bits_retain(value);
            }
        }
        Ok(())
    }

    /// Async version of [`RegisterAccess::get_reg`](crate::raw::RegisterAccess::get_reg).
    pub async fn get_reg_async(&mut self, reg: u8, buf: &mut [u8]) -> Result<(), Error<I2C::Error>> {
        self.ensure_initialized()?;
        self.read_regs_async(reg, buf)
            .await
            .inspect_err(|_| warn!("max30205: read from {=u8:#x} failed", reg))?;
        if reg == addr::CONFIG {
            if let Some(&value) = buf.first() {
                self.config = ConfigBits::from_bits_retain(value);
            }
        }
        Ok(())
    }

    async fn get_config_async(&mut self) -> Result<Config, Error<I2C::Error>> {
        self.ensure_initialized()?;
        let bits = ConfigBits::from_bits_retain(self.read_reg_async(addr::CONFIG).await?);
        self.config = bits;
        Ok(Config::from_bits(bits))
    }

    async fn update_config_async(
        &mut self,
        mask: ConfigBits,
        value: ConfigBits,
    ) -> Result<ConfigBits, Error<I2C::Error>> {
        let mask = mask | ConfigBits::ONE_SHOT;
        let new = self.update_reg_async(addr::CONFIG, mask.bits(), value.bits()).await?;
        self.config = ConfigBits::from_bits_retain(new);
        Ok(self.config)
    }

    async fn write_reg_async(&mut self, reg: u8, value: u8) -> Result<(), Error<I2C::Error>> {
        self.i2c
            .write(self.address, &[reg, value])
            .await
            .map_err(Error::I2c)
    }

    async fn read_reg_async(&mut self, reg: u8) -> Result<u8, Error<I2C::Error>> {
        let mut buf = [0u8; 1];
        self.i2c
            .write_read(self.address, &[reg], &mut buf)
            .await
            .map_err(Error::I2c)?;
        Ok(buf[0])
    }

    async fn update_reg_async(&mut self, reg: u8, mask: u8, value: u8) -> Result<u8, Error<I2C::Error>> {
        let cur = self.read_reg_async(reg).await?;
        let new = (cur & !mask) | (value & mask);
        self.write_reg_async(reg, new).await?;
        Ok(new)
    }

    async fn write_regs_async(&mut self, start_reg: u8, data: &[u8]) -> Result<(), Error<I2C::Error>> {
        let mut buf = [0u8; WRITE_BUF_LEN];
        if data.len() + 1 > buf.len() {
            return Err(Error::OutOfRange);
        }
        buf[0] = start_reg;
        buf[1..=data.len()].copy_from_slice(data);
        self.i2c
            .write(self.address, &buf[..=data.len()])
            .await
            .map_err(Error::I2c)
    }

    async fn read_regs_async(&mut self, start_reg: u8, data: &mut [u8]) -> Result<(), Error<I2C::Error>> {
        self.i2c
            .write_read(self.address, &[start_reg], data)
            .await
            .map_err(Error::I2c)
    }
}
