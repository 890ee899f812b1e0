//! Text formatting for the two display lines
//!
//! Every helper returns a fixed-capacity [`Line`]. Values too wide for the
//! buffer are cut short rather than reported.

use core::fmt::Write;
use core::net::Ipv4Addr;

use heapless::String;

use crate::config::{ClockFormat, TemperatureUnit};
use crate::traits::{ClockTime, MacAddress};

/// Capacity of one rendered line
pub const LINE_LEN: usize = 24;

/// One rendered display line
pub type Line = String<LINE_LEN>;

fn write_line(args: core::fmt::Arguments<'_>) -> Line {
    let mut line = Line::new();
    let _ = line.write_fmt(args);
    line
}

/// Format a time of day
///
/// - 24h: `"07:05h"`
/// - 12h: `"12:00 AM"` at midnight, `" 9:00 AM"`, `"12:30 PM"`, `"1:05 PM"`
pub fn format_time(time: ClockTime, format: ClockFormat) -> Line {
    match format {
        ClockFormat::Hour24 => write_line(format_args!("{:02}:{:02}h", time.hour, time.minute)),
        ClockFormat::Hour12 => {
            let suffix = if time.hour >= 12 { "PM" } else { "AM" };
            match time.hour {
                0 => write_line(format_args!("12:{:02} {}", time.minute, suffix)),
                1..=12 => write_line(format_args!(
                    "{:>2}:{:02} {}",
                    time.hour,
                    time.minute,
                    suffix
                )),
                hour => write_line(format_args!(
                    "{}:{:02} {}",
                    hour - 12,
                    time.minute,
                    suffix
                )),
            }
        }
    }
}

/// Format a temperature with one decimal, e.g. `"21.5\tC"`
pub fn format_temperature(value: f32, unit: TemperatureUnit) -> Line {
    write_line(format_args!("{:.1}\t{}", value, unit.symbol()))
}

/// Format relative humidity, e.g. `"45.2% rH"`
pub fn format_humidity(value: f32) -> Line {
    write_line(format_args!("{:.1}% rH", value))
}

/// Format ambient light, e.g. `"312.0 LUX"`
pub fn format_lux(value: f32) -> Line {
    write_line(format_args!("{:.1} LUX", value))
}

/// Format a hardware address as `"0A:1B:2C:3D:4E:5F"`
pub fn format_mac(mac: &MacAddress) -> Line {
    write_line(format_args!(
        "{:02X}:{:02X}:{:02X}:{:02X}:{:02X}:{:02X}",
        mac[0],
        mac[1],
        mac[2],
        mac[3],
        mac[4],
        mac[5]
    ))
}

/// Format an IPv4 address in dotted quad form
pub fn format_ip(addr: Ipv4Addr) -> Line {
    write_line(format_args!("{}", addr))
}
