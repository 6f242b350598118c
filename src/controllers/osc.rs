// src/controllers/osc.rs
//
// Remote control over OSC. Mirrors the keyboard: fill, clear and run.

use nannou_osc as osc;
use std::error::Error;

// upper bound for a remote fill
pub const MAX_FILL_COUNT: usize = 256;

#[derive(Debug, Clone, PartialEq)]
pub enum OscCommand {
    Fill { count: Option<usize> },
    Values(Vec<i64>),
    Clear,
    Run,
}

pub struct OscController {
    command_queue: Vec<OscCommand>,
    receiver: osc::Receiver,
}

impl OscController {
    pub fn new(port: u16) -> Result<Self, Box<dyn Error>> {
        let receiver = osc::receiver(port)?;
        log::info!("Listening for OSC on port {}", port);

        Ok(Self {
            command_queue: Vec::new(),
            receiver,
        })
    }

    pub fn process_messages(&mut self) {
        for (packet, _addr) in self.receiver.try_iter() {
            for message in packet.into_msgs() {
                match parse_command(&message.addr, &message.args) {
                    Some(command) => self.command_queue.push(command),
                    None => log::warn!("Unknown OSC message: {} {:?}", message.addr, message.args),
                }
            }
        }
    }

    pub fn take_commands(&mut self) -> Vec<OscCommand> {
        std::mem::take(&mut self.command_queue)
    }
}

pub fn parse_command(addr: &str, args: &[osc::Type]) -> Option<OscCommand> {
    match addr {
        "/sort/fill" => match args {
            [] => Some(OscCommand::Fill { count: None }),
            [osc::Type::Int(count)] if *count >= 0 => {
                let mut count = *count as usize;
                if count > MAX_FILL_COUNT {
                    log::warn!("Fill count {} clamped to {}", count, MAX_FILL_COUNT);
                    count = MAX_FILL_COUNT;
                }
                Some(OscCommand::Fill { count: Some(count) })
            }
            _ => None,
        },
        "/sort/values" => args
            .iter()
            .map(|arg| match arg {
                osc::Type::Int(v) => Some(i64::from(*v)),
                osc::Type::Long(v) => Some(*v),
                _ => None,
            })
            .collect::<Option<Vec<_>>>()
            .map(OscCommand::Values),
        "/sort/clear" => Some(OscCommand::Clear),
        "/sort/run" => Some(OscCommand::Run),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_with_and_without_count() {
        assert_eq!(
            parse_command("/sort/fill", &[]),
            Some(OscCommand::Fill { count: None })
        );
        assert_eq!(
            parse_command("/sort/fill", &[osc::Type::Int(8)]),
            Some(OscCommand::Fill { count: Some(8) })
        );
        assert_eq!(parse_command("/sort/fill", &[osc::Type::Int(-1)]), None);
    }

    #[test]
    fn test_huge_fill_is_clamped() {
        assert_eq!(
            parse_command("/sort/fill", &[osc::Type::Int(i32::MAX)]),
            Some(OscCommand::Fill {
                count: Some(MAX_FILL_COUNT)
            })
        );
        assert_eq!(
            parse_command("/sort/fill", &[osc::Type::Int(MAX_FILL_COUNT as i32)]),
            Some(OscCommand::Fill {
                count: Some(MAX_FILL_COUNT)
            })
        );
    }

    #[test]
    fn test_values_accept_ints_only() {
        assert_eq!(
            parse_command(
                "/sort/values",
                &[osc::Type::Int(5), osc::Type::Long(3), osc::Type::Int(4)]
            ),
            Some(OscCommand::Values(vec![5, 3, 4]))
        );
        assert_eq!(
            parse_command("/sort/values", &[osc::Type::Float(1.5)]),
            None
        );
    }

    #[test]
    fn test_simple_commands_and_unknown_address() {
        assert_eq!(parse_command("/sort/run", &[]), Some(OscCommand::Run));
        assert_eq!(parse_command("/sort/clear", &[]), Some(OscCommand::Clear));
        assert_eq!(parse_command("/grid/create", &[]), None);
    }
}
