use crate::web::models::{Message, Role};

/// Rewrites a client conversation into the shape the model accepts: the
/// first turn is `user`, `user` and `assistant` strictly alternate, and no
/// `system` turn remains.
///
/// Client `system` turns are dropped. `instruction` is prefixed onto the
/// first `user` turn, or becomes a bare leading `user` turn when the
/// conversation would otherwise start with `assistant` or be empty.
pub fn normalize(messages: Vec<Message>, instruction: &str) -> Vec<Message> {
    let mut turns = messages
        .into_iter()
        .filter(|message| message.role != Role::System)
        .fold(Vec::<Message>::new(), |mut turns, message| {
            match turns.last_mut() {
                None if message.role == Role::User => {
                    turns.push(Message::new(
                        Role::User,
                        format!("{}\n\n{}", instruction, message.content),
                    ));
                }
                Some(last) if last.role == message.role => {
                    last.content.push('\n');
                    last.content.push_str(&message.content);
                }
                _ => turns.push(message),
            }
            turns
        });

    if turns.first().map_or(true, |first| first.role != Role::User) {
        turns.insert(0, Message::new(Role::User, instruction));
    }

    turns
}
