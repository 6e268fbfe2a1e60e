use std::time::{Duration, Instant};

use actix::prelude::*;
use actix_web::{web, Error, HttpRequest, HttpResponse};
use actix_web_actors::ws;
use serde::Deserialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::state::Seat;
use crate::services::room::{Join, Leave, Outbound, Submit};
use crate::services::GameRoom;
use crate::state::app_state::AppState;
use crate::ws::protocol::{error_msg, ClientMsg, ErrorCode, ServerMsg, PROTOCOL_VERSION};

const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(20);
const CLIENT_TIMEOUT: Duration = Duration::from_secs(40);

#[derive(Debug, Deserialize)]
pub struct JoinQuery {
    seat: Option<Seat>,
}

/// GET /api/rooms/{room_id}/ws
///
/// Upgrades to a websocket bound to one seat of the room. The seat is
/// claimed as part of the upgrade; an explicit `?seat=` query pins a
/// specific one, otherwise the first free seat is taken.
pub async fn upgrade(
    req: HttpRequest,
    stream: web::Payload,
    path: web::Path<Uuid>,
    query: web::Query<JoinQuery>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, Error> {
    let room_id = path.into_inner();
    let room = app_state.rooms.get(room_id)?;

    let session = WsSession::new(room_id, room, query.seat);
    ws::start(session, &req, stream)
}

pub struct WsSession {
    room_id: Uuid,
    room: Addr<GameRoom>,
    requested_seat: Option<Seat>,
    seat: Option<Seat>,

    last_heartbeat: Instant,
    hello_done: bool,
}

impl WsSession {
    fn new(room_id: Uuid, room: Addr<GameRoom>, requested_seat: Option<Seat>) -> Self {
        Self {
            room_id,
            room,
            requested_seat,
            seat: None,
            last_heartbeat: Instant::now(),
            hello_done: false,
        }
    }

    fn send_json(ctx: &mut ws::WebsocketContext<Self>, msg: &ServerMsg) {
        match serde_json::to_string(msg) {
            Ok(payload) => ctx.text(payload),
            Err(err) => warn!(error = %err, "[WS SESSION] failed to serialize outbound message"),
        }
    }

    fn send_error_and_close(
        &self,
        ctx: &mut ws::WebsocketContext<Self>,
        code: ErrorCode,
        message: impl Into<String>,
    ) {
        let msg = ServerMsg::Error {
            code,
            message: message.into(),
        };
        Self::send_json(ctx, &msg);
        ctx.close(Some(ws::CloseReason::from(ws::CloseCode::Error)));
        ctx.stop();
    }

    fn start_heartbeat(&self, ctx: &mut ws::WebsocketContext<Self>) {
        ctx.run_interval(HEARTBEAT_INTERVAL, |actor, ctx| {
            if Instant::now().duration_since(actor.last_heartbeat) > CLIENT_TIMEOUT {
                warn!(
                    room_id = %actor.room_id,
                    seat = ?actor.seat,
                    "[WS SESSION] heartbeat timed out"
                );
                ctx.close(Some(ws::CloseReason::from(ws::CloseCode::Normal)));
                ctx.stop();
                return;
            }
            ctx.ping(b"keepalive");
        });
    }

    fn claim_seat(&self, ctx: &mut ws::WebsocketContext<Self>) {
        let join = Join {
            seat: self.requested_seat,
            recipient: ctx.address().recipient::<Outbound>(),
        };
        self.room
            .send(join)
            .into_actor(self)
            .map(|res, actor, ctx| match res {
                Ok(Ok(seat)) => {
                    actor.seat = Some(seat);
                    info!(room_id = %actor.room_id, seat, "[WS SESSION] seat joined");
                }
                Ok(Err(err)) => {
                    Self::send_json(ctx, &error_msg(&err));
                    ctx.close(Some(ws::CloseReason::from(ws::CloseCode::Error)));
                    ctx.stop();
                }
                Err(err) => {
                    warn!(room_id = %actor.room_id, error = %err, "[WS SESSION] join failed");
                    ctx.close(Some(ws::CloseReason::from(ws::CloseCode::Error)));
                    ctx.stop();
                }
            })
            .wait(ctx);
    }
}

impl Actor for WsSession {
    type Context = ws::WebsocketContext<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        info!(room_id = %self.room_id, "[WS SESSION] started");
        self.claim_seat(ctx);
        self.start_heartbeat(ctx);
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        if let Some(seat) = self.seat {
            self.room.do_send(Leave { seat });
        }
        info!(room_id = %self.room_id, seat = ?self.seat, "[WS SESSION] stopped");
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for WsSession {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Ping(payload)) => {
                self.last_heartbeat = Instant::now();
                ctx.pong(&payload);
            }
            Ok(ws::Message::Pong(_)) => {
                self.last_heartbeat = Instant::now();
            }
            Ok(ws::Message::Text(text)) => {
                self.last_heartbeat = Instant::now();

                let parsed: Result<ClientMsg, _> = serde_json::from_str(&text);
                let Ok(cmd) = parsed else {
                    self.send_error_and_close(ctx, ErrorCode::MalformedAction, "Malformed JSON");
                    return;
                };

                match cmd {
                    ClientMsg::Hello { protocol } => {
                        if protocol != PROTOCOL_VERSION {
                            self.send_error_and_close(
                                ctx,
                                ErrorCode::BadProtocol,
                                "Unsupported protocol version",
                            );
                            return;
                        }
                        let Some(seat) = self.seat else {
                            self.send_error_and_close(
                                ctx,
                                ErrorCode::BadRequest,
                                "No seat bound to this connection",
                            );
                            return;
                        };
                        self.hello_done = true;
                        Self::send_json(
                            ctx,
                            &ServerMsg::HelloAck {
                                protocol: PROTOCOL_VERSION,
                                seat,
                            },
                        );
                    }

                    ClientMsg::Action { action } => {
                        if !self.hello_done {
                            self.send_error_and_close(
                                ctx,
                                ErrorCode::BadRequest,
                                "Must send hello first",
                            );
                            return;
                        }
                        let Some(seat) = self.seat else {
                            return;
                        };

                        self.room
                            .send(Submit { seat, action })
                            .into_actor(self)
                            .map(move |res, actor, ctx| match res {
                                // Success is answered by the room's
                                // snapshot broadcast.
                                Ok(Ok(())) => {}
                                Ok(Err(err)) => {
                                    Self::send_json(ctx, &error_msg(&err));
                                }
                                Err(err) => {
                                    warn!(
                                        room_id = %actor.room_id,
                                        seat,
                                        error = %err,
                                        "[WS SESSION] room unreachable"
                                    );
                                    ctx.close(Some(ws::CloseReason::from(ws::CloseCode::Error)));
                                    ctx.stop();
                                }
                            })
                            .spawn(ctx);
                    }
                }
            }
            Ok(ws::Message::Binary(_)) => {
                self.last_heartbeat = Instant::now();
                self.send_error_and_close(ctx, ErrorCode::BadRequest, "Binary not supported");
            }
            Ok(ws::Message::Close(reason)) => {
                ctx.close(reason);
                ctx.stop();
            }
            Ok(ws::Message::Continuation(_)) | Ok(ws::Message::Nop) => {
                self.last_heartbeat = Instant::now();
            }
            Err(err) => {
                warn!(
                    room_id = %self.room_id,
                    seat = ?self.seat,
                    error = %err,
                    "[WS SESSION] protocol error"
                );
                ctx.close(Some(ws::CloseReason::from(ws::CloseCode::Error)));
                ctx.stop();
            }
        }
    }
}

impl Handler<Outbound> for WsSession {
    type Result = ();

    fn handle(&mut self, msg: Outbound, ctx: &mut Self::Context) -> Self::Result {
        if let ServerMsg::RoomClosed { .. } = &msg.0 {
            Self::send_json(ctx, &msg.0);
            // Room is gone; don't bother it with a Leave on stop.
            self.seat = None;
            ctx.close(Some(ws::CloseReason::from(ws::CloseCode::Normal)));
            ctx.stop();
            return;
        }
        Self::send_json(ctx, &msg.0);
    }
}
