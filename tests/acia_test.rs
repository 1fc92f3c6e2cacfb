//! Tests for the serial adapter driven through the system bus, the way
//! firmware reaches it.

use lib65c02::devices::acia::{STATUS_RDRF, STATUS_TDRE};
use lib65c02::machine::SERIAL1_BASE;
use lib65c02::{Acia, Bus, Machine, MachineConfig, QueuedInput};
use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

/// `io::Write` sink that appends into a shared buffer.
#[derive(Clone, Default)]
struct SharedOutput(Rc<RefCell<Vec<u8>>>);

impl Write for SharedOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn machine_with_serial() -> (Machine, QueuedInput, SharedOutput) {
    let mut machine = Machine::new(MachineConfig::default());
    let input = QueuedInput::new();
    let output = SharedOutput::default();
    let serial = machine.serial1_mut().unwrap();
    serial.set_input(Box::new(input.clone()));
    serial.set_output(Box::new(output.clone()));
    (machine, input, output)
}

#[test]
fn test_status_register_through_bus() {
    let (mut machine, mut input, _output) = machine_with_serial();
    let bus = machine.cpu_mut().bus_mut();

    assert_eq!(bus.read(SERIAL1_BASE + 1), STATUS_TDRE);

    input.push_byte(b'X');
    assert_eq!(bus.read(SERIAL1_BASE + 1), STATUS_TDRE | STATUS_RDRF);
    // Polling did not consume the byte.
    assert_eq!(input.len(), 1);
}

#[test]
fn test_data_read_consumes_one_byte() {
    let (mut machine, mut input, _output) = machine_with_serial();
    let bus = machine.cpu_mut().bus_mut();

    input.push_str("AB");
    assert_eq!(bus.read(SERIAL1_BASE), b'A');
    assert_eq!(bus.read(SERIAL1_BASE), b'B');
    // Drained: RDRF drops, data register repeats the last byte.
    assert_eq!(bus.read(SERIAL1_BASE + 1), STATUS_TDRE);
    assert_eq!(bus.read(SERIAL1_BASE), b'B');
}

#[test]
fn test_line_feed_becomes_carriage_return() {
    let (mut machine, mut input, _output) = machine_with_serial();
    input.push_str("\n");

    let bus = machine.cpu_mut().bus_mut();
    assert_eq!(bus.read(SERIAL1_BASE), 0x0D);
}

#[test]
fn test_high_bit_masked_on_receive() {
    let (mut machine, mut input, _output) = machine_with_serial();
    input.push_byte(0xC1);

    let bus = machine.cpu_mut().bus_mut();
    assert_eq!(bus.read(SERIAL1_BASE), 0x41);
}

#[test]
fn test_transmit_writes_and_flushes() {
    let (mut machine, _input, output) = machine_with_serial();
    let bus = machine.cpu_mut().bus_mut();

    for &b in b"OK" {
        bus.write(SERIAL1_BASE, b);
    }

    assert_eq!(&*output.0.borrow(), b"OK");
}

#[test]
fn test_command_control_and_programmed_reset() {
    let (mut machine, _input, _output) = machine_with_serial();
    let bus = machine.cpu_mut().bus_mut();

    bus.write(SERIAL1_BASE + 2, 0x0B);
    bus.write(SERIAL1_BASE + 3, 0x1E);
    assert_eq!(bus.read(SERIAL1_BASE + 2), 0x0B);
    assert_eq!(bus.read(SERIAL1_BASE + 3), 0x1E);

    bus.write(SERIAL1_BASE + 1, 0x00); // programmed reset
    assert_eq!(bus.read(SERIAL1_BASE + 2), 0x00);
    assert_eq!(bus.read(SERIAL1_BASE + 3), 0x00);
}

#[test]
fn test_second_adapter_is_independent() {
    let mut machine = Machine::new(MachineConfig::default());
    let mut input2 = QueuedInput::new();
    input2.push_byte(b'Z');
    machine
        .serial2_mut()
        .unwrap()
        .set_input(Box::new(input2.clone()));

    let bus = machine.cpu_mut().bus_mut();
    // Adapter 1 has no input attached.
    assert_eq!(bus.read(SERIAL1_BASE + 1), STATUS_TDRE);
    assert_eq!(bus.read(0xC021), STATUS_TDRE | STATUS_RDRF);
    assert_eq!(bus.read(0xC020), b'Z');
}

#[test]
fn test_adapter_without_streams() {
    let mut acia = Acia::new();
    use lib65c02::Device;
    assert_eq!(acia.read(1), STATUS_TDRE); // no RDRF without input
    acia.write(0, b'Q'); // discarded without output
    assert_eq!(acia.read(0), 0x00); // empty latch
}
