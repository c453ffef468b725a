use katarenga_arena::protocol::{apply_remote, Envelope, Payload, Peer};
use katarenga_arena::{GameState, Move, Player, Position};
use std::time::Duration;

/// Two peers on one machine: the host announces the variant, the guest
/// checks it, then the host sends its opening move and the guest re-validates
/// it against its own engine before trusting it.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let addr = "127.0.0.1:12345";

    let host_task = tokio::spawn(async move {
        let mut peer = Peer::host(addr).await?;
        let mut state = GameState::new_katarenga();

        peer.send(&Envelope::new(Payload::GameMode {
            mode: state.variant().mode(),
        }))
        .await?;

        let mv = Move::new(Position::new(1, 1), Position::new(2, 1));
        state.apply_move(mv)?;
        peer.send(&Envelope::new(Payload::Move {
            from: [mv.from.row, mv.from.col],
            to: [mv.to.row, mv.to.col],
            player: Player::One.number(),
        }))
        .await?;
        println!("[host] opening move sent");

        Ok::<_, Box<dyn std::error::Error + Send + Sync>>(())
    });

    // The host needs a moment to start listening
    let mut peer = loop {
        match Peer::join(addr).await {
            Ok(peer) => break peer,
            Err(_) => tokio::time::sleep(Duration::from_millis(50)).await,
        }
    };
    let mut state = GameState::new_katarenga();

    let mode = peer.recv().await?;
    apply_remote(&mut state, &mode)?;
    println!("[guest] variant confirmed");

    let opening = peer.recv().await?;
    apply_remote(&mut state, &opening)?;
    println!(
        "[guest] opening move accepted, player {} to move",
        state.current_player().number()
    );

    host_task
        .await
        .map_err(|e| format!("host task failed: {e}"))?
        .map_err(|e| -> Box<dyn std::error::Error> { e })?;
    Ok(())
}
