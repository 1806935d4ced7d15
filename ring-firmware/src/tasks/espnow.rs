// ESP-NOW Task - Broadcast-Kommandos zwischen Robotern und LED-Ringen
use defmt::{error, info, warn};
use embassy_futures::select::{Either, select};
use esp_radio::esp_now::{BROADCAST_ADDRESS, EspNow, EspNowWifiInterface, PeerInfo};

use crate::config::ESPNOW_CHANNEL;
use crate::{CommandMessage, OutboundReceiver, StateSignal, StateSource, StateUpdate};

/// Fehler beim Aufsetzen von ESP-NOW
#[derive(Debug, defmt::Format)]
pub enum EspNowError {
    /// Kanal konnte nicht gesetzt werden
    ChannelFailed,
    /// Broadcast-Peer konnte nicht registriert werden
    PeerAddFailed,
}

/// Bereitet ESP-NOW für Broadcast-Betrieb vor
///
/// Setzt den gemeinsamen Kanal und registriert die Broadcast-Adresse als
/// Peer, falls der Treiber das nicht schon selbst getan hat.
pub fn init(esp_now: &mut EspNow<'_>) -> Result<(), EspNowError> {
    esp_now
        .set_channel(ESPNOW_CHANNEL)
        .map_err(|_| EspNowError::ChannelFailed)?;

    if !esp_now.peer_exists(&BROADCAST_ADDRESS) {
        esp_now
            .add_peer(PeerInfo {
                interface: EspNowWifiInterface::Sta,
                peer_address: BROADCAST_ADDRESS,
                lmk: None,
                channel: None,
                encrypt: false,
            })
            .map_err(|_| EspNowError::PeerAddFailed)?;
    }

    info!("ESP-NOW: ready on channel {}", ESPNOW_CHANNEL);
    Ok(())
}

/// Verarbeitet einen empfangenen Frame
///
/// Nur FsmState-Kommandos ändern den Display State. Enable/Disable anderer
/// Boards werden nur geloggt, ungültige Frames verworfen.
fn handle_frame(data: &[u8], state_signal: &StateSignal) {
    let message = match CommandMessage::decode(data) {
        Ok(message) => message,
        Err(e) => {
            warn!("ESP-NOW: dropping frame: {}", e);
            return;
        }
    };

    match message.display_state() {
        Some(state) => {
            info!("ESP-NOW: {}", message);
            state_signal.signal(StateUpdate {
                state,
                source: StateSource::Network,
            });
        }
        None => info!("ESP-NOW: ignoring {}", message),
    }
}

/// ESP-NOW Task
///
/// Wartet gleichzeitig auf eingehende Frames und auf ausgehende Kommandos
/// des Ring-Tasks. Sendefehler werden geloggt, aber nicht wiederholt.
///
/// # Parameter
/// - `esp_now`: ESP-NOW Interface (bereits mit `init()` vorbereitet)
/// - `outbound`: Receiver für Enable/Disable-Kommandos
/// - `state_signal`: Signal an den Ring-Task
#[embassy_executor::task]
pub async fn espnow_task(
    mut esp_now: EspNow<'static>,
    outbound: OutboundReceiver,
    state_signal: &'static StateSignal,
) {
    info!("ESP-NOW: task started");

    loop {
        let event = select(esp_now.receive_async(), outbound.receive()).await;

        match event {
            Either::First(received) => handle_frame(received.data(), state_signal),
            Either::Second(message) => {
                match esp_now
                    .send_async(&BROADCAST_ADDRESS, &message.to_bytes())
                    .await
                {
                    Ok(()) => info!("ESP-NOW: sent {}", message),
                    Err(_) => error!("ESP-NOW: failed to send {}", message),
                }
            }
        }
    }
}
