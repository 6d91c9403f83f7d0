use super::*;
use futures::StreamExt;

impl Handle {
    /// Spawns the pump between one WebSocket and the lobby.
    ///
    /// Text frames become [`Event::Message`], lobby output becomes text
    /// frames, pings are answered in place. Whichever side ends first, the
    /// lobby hears exactly one [`Event::Disconnect`] for the connection.
    pub fn bridge(
        &self,
        mut session: actix_ws::Session,
        mut stream: actix_ws::MessageStream,
    ) -> anyhow::Result<()> {
        let lobby = self.clone();
        let (id, mut rx) = lobby
            .connect()
            .inspect(|(id, _)| log::debug!("[bridge {}] opened", id))?;
        actix_web::rt::spawn(async move {
            'sesh: loop {
                tokio::select! {
                    biased;
                    msg = rx.recv() => match msg {
                        Some(json) => if session.text(json).await.is_err() { break 'sesh },
                        None => break 'sesh,
                    },
                    msg = stream.next() => match msg {
                        Some(Ok(actix_ws::Message::Text(text))) => if lobby.message(id, text.to_string()).is_err() { break 'sesh },
                        Some(Ok(actix_ws::Message::Ping(bytes))) => if session.pong(&bytes).await.is_err() { break 'sesh },
                        Some(Ok(actix_ws::Message::Close(reason))) => {
                            log::debug!("[bridge {}] closed by client {:?}", id, reason);
                            break 'sesh
                        }
                        Some(Err(e)) => {
                            log::warn!("[bridge {}] protocol error {}", id, e);
                            break 'sesh
                        }
                        None => break 'sesh,
                        _ => continue 'sesh,
                    },
                }
            }
            if let Err(e) = lobby.disconnect(id) {
                log::warn!("[bridge {}] {}", id, e);
            }
            let _ = session.close(None).await;
        });
        Ok(())
    }
}
