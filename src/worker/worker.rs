use super::request::Request;
use crate::equity::EquityResult;
use tokio::sync::oneshot;

/// Runs equity queries off the async executor, one blocking task each.
///
/// A query goes in through [`Worker::submit`] and its single answer comes
/// back through the returned [`Ticket`]. Nothing is shared between queries.
pub struct Worker;

impl Worker {
    /// Decode the request now, so malformed cards fail fast, and simulate it
    /// on the blocking pool.
    pub fn submit(request: Request) -> anyhow::Result<Ticket> {
        let scenario = request.scenario()?;
        let engine = request.engine();
        let mut rng = request.rng();
        let (tx, rx) = oneshot::channel();
        tokio::task::spawn_blocking(move || {
            if tx.is_closed() {
                log::debug!("ticket dropped before simulation started");
                return;
            }
            let result = engine.equity(&scenario, &mut rng);
            if tx.send(result).is_err() {
                log::debug!("ticket dropped before simulation finished");
            }
        });
        Ok(Ticket(rx))
    }
}

/// The pending answer to one submitted query. Drop it to abandon the query.
pub struct Ticket(oneshot::Receiver<EquityResult>);

impl Ticket {
    pub async fn wait(self) -> anyhow::Result<EquityResult> {
        self.0
            .await
            .map_err(|_| anyhow::anyhow!("worker exited without answering"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(seed: u64) -> Request {
        Request {
            hero_cards: vec!["Ah".into(), "Kh".into()],
            board_cards: vec!["Qh".into(), "7h".into(), "2c".into()],
            num_opponents: 2,
            pot: 60.,
            our_bet: 20.,
            iterations: 300,
            seed: Some(seed),
            ..Request::default()
        }
    }

    #[tokio::test]
    async fn ticket_matches_direct_evaluation() {
        let direct = request(3).evaluate().unwrap();
        let ticket = Worker::submit(request(3)).unwrap();
        assert_eq!(ticket.wait().await.unwrap(), direct);
    }

    #[tokio::test]
    async fn tickets_are_independent() {
        let a = Worker::submit(request(4)).unwrap();
        let b = Worker::submit(request(4)).unwrap();
        let (a, b) = tokio::join!(a.wait(), b.wait());
        assert_eq!(a.unwrap(), b.unwrap());
    }

    #[tokio::test]
    async fn malformed_cards_fail_on_submit() {
        let request = Request {
            board_cards: vec!["Zz".into()],
            ..request(5)
        };
        assert!(Worker::submit(request).is_err());
    }

    #[tokio::test]
    async fn dropped_ticket_is_harmless() {
        drop(Worker::submit(request(6)).unwrap());
        let ticket = Worker::submit(request(6)).unwrap();
        assert!(ticket.wait().await.is_ok());
    }
}
