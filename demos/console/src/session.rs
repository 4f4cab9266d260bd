//! Per-terminal session state and command dispatch.

use hotpotato::prelude::*;

use crate::command::{is_bot, Command};
use crate::replies;

pub const DEFAULT_ROOM: &str = "console-room";
pub const DEFAULT_CHANNEL: &str = "general";

const HELP: &str = "\
commands:
  <user> toss <target>   pass the potato (starts a game if none is running)
  <user> steal <target>  take the potato from its holder
  <user> cook            heat the potato and keep it
  where                  show who holds the potato
  leaderboard            show the room's death ranking
  channel <name>         switch channel
  room <name>            switch room
  quit";

/// What the loop should do after a command.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Reply(String),
    Quit,
}

/// The room and channel the terminal is currently playing in.
#[derive(Debug, Clone)]
pub struct Session {
    namespace: Namespace,
    room: RoomId,
    channel: ChannelId,
    top: usize,
}

impl Session {
    pub fn new(config: &HotPotatoConfig) -> Self {
        Self {
            namespace: Namespace::new(config.namespace.clone()),
            room: RoomId::new(DEFAULT_ROOM),
            channel: ChannelId::new(DEFAULT_CHANNEL),
            top: config.leaderboard_top,
        }
    }

    /// Prompt prefix, e.g. `console-room#general> `.
    pub fn prompt(&self) -> String {
        format!("{}#{}> ", self.room, self.channel)
    }

    pub async fn dispatch<S: Service>(&mut self, svc: &S, cmd: Command) -> Outcome {
        let reply = match cmd {
            Command::Quit => return Outcome::Quit,
            Command::Help => HELP.to_string(),
            Command::Channel(name) => {
                self.channel = ChannelId::new(name);
                format!("now playing in #{}", self.channel)
            }
            Command::Room(name) => {
                self.room = RoomId::new(name);
                format!("now playing in room {}", self.room)
            }
            Command::Toss { actor, target } => self.toss(svc, actor, target).await,
            Command::Steal { actor, target } => self.steal(svc, actor, target).await,
            Command::Cook { actor } => self.cook(svc, actor).await,
            Command::Where => self.where_is(svc).await,
            Command::Leaderboard => self.leaderboard(svc).await,
        };
        Outcome::Reply(reply)
    }

    // ---------------------------------------------------------------------
    // Game commands
    // ---------------------------------------------------------------------

    async fn toss<S: Service>(&self, svc: &S, actor: String, target: String) -> String {
        if is_bot(&target) {
            return replies::toss_invalid_target(&target);
        }
        let req = TossRequest {
            namespace: self.namespace.clone(),
            room_id: self.room.clone(),
            channel_id: self.channel.clone(),
            actor: UserId::new(actor.as_str()),
            target: UserId::new(target.as_str()),
        };
        match svc.toss(&req).await {
            Ok(rsp) => replies::toss_success(&actor, &target, &rsp),
            Err(EngineError::NotHolder { holder }) => replies::toss_not_holder(&holder),
            Err(err) => failure("toss", err),
        }
    }

    async fn steal<S: Service>(&self, svc: &S, actor: String, target: String) -> String {
        if is_bot(&target) {
            return replies::steal_invalid_target(&target);
        }
        let req = StealRequest {
            namespace: self.namespace.clone(),
            room_id: self.room.clone(),
            channel_id: self.channel.clone(),
            actor: UserId::new(actor.as_str()),
            target: UserId::new(target.as_str()),
        };
        match svc.steal(&req).await {
            Ok(rsp) => replies::steal_success(&actor, &target, &rsp),
            Err(EngineError::SelfSteal) => replies::steal_from_self(),
            Err(EngineError::NotHolder { holder }) => {
                replies::steal_not_holder(&target, &holder)
            }
            Err(err) => failure("steal", err),
        }
    }

    async fn cook<S: Service>(&self, svc: &S, actor: String) -> String {
        let req = CookRequest {
            namespace: self.namespace.clone(),
            room_id: self.room.clone(),
            channel_id: self.channel.clone(),
            actor: UserId::new(actor.as_str()),
        };
        match svc.cook(&req).await {
            Ok(rsp) => replies::cook_success(&actor, &rsp),
            Err(EngineError::NotHolder { holder }) => replies::cook_not_holder(&holder),
            Err(err) => failure("cook", err),
        }
    }

    async fn where_is<S: Service>(&self, svc: &S) -> String {
        let req = GetHolderRequest {
            namespace: self.namespace.clone(),
            room_id: self.room.clone(),
            channel_id: self.channel.clone(),
        };
        match svc.get_holder(&req).await {
            Ok(rsp) => replies::where_success(&rsp),
            Err(err) => failure("where", err),
        }
    }

    async fn leaderboard<S: Service>(&self, svc: &S) -> String {
        let req = GetLeaderboardRequest {
            namespace: self.namespace.clone(),
            room_id: self.room.clone(),
            top: self.top,
        };
        match svc.get_leaderboard(&req).await {
            Ok(rsp) => replies::leaderboard_success(&rsp),
            Err(err) => failure("leaderboard", err),
        }
    }
}

/// Reply for errors without a command-specific message.
fn failure(command: &'static str, err: EngineError) -> String {
    match err {
        EngineError::NoOngoingGame => replies::no_ongoing_game(),
        err => {
            tracing::error!(command, error = %err, "command failed");
            replies::unexpected_error()
        }
    }
}
