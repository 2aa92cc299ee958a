use std::collections::LinkedList;
use std::io;
use std::io::Write;

use micro_message::body::{EmptyBody, FileBody, ListBody, StringBody, VectorBody};
use micro_message::codec::write;
use micro_message::protocol::{Fields, Request, Response};
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

fn main() {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::TRACE).with_writer(io::stderr).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let mut stdout = io::stdout().lock();

    let mut request: Request<StringBody> = Request::new("hello from a string body\n".to_string());
    request.set_method("POST");
    request.set_target("/echo");
    if let Err(e) = request.fields_mut().set("Content-Type", "text/plain") {
        error!(cause = %e, "invalid field");
    }
    send(&mut stdout, "request<string>", |out| write(out, &request));

    let response: Response<VectorBody<u8>> = Response::new(b"bytes from a vector body\n".to_vec());
    send(&mut stdout, "response<vector>", |out| write(out, &response));

    let mut response: Response<ListBody<String>> = Response::default();
    response.body_mut().extend(["list", " ", "body", "\n"].map(String::from));
    send(&mut stdout, "response<list>", |out| write(out, &response));

    let response: Response<EmptyBody> = Response::default();
    send(&mut stdout, "response<empty>", |out| write(out, &response));

    let path = std::env::args_os().nth(1).unwrap_or_else(|| "Cargo.toml".into());
    let response: Response<FileBody> = Response::new(path.into());
    send(&mut stdout, "response<file>", |out| write(out, &response));

    if let Err(e) = stdout.flush() {
        error!(cause = %e, "failed to flush stdout");
    }
}

fn send<W, S>(out: &mut W, name: &str, serialize: S)
where
    W: Write,
    S: FnOnce(&mut W) -> Result<(), micro_message::protocol::SendError>,
{
    match serialize(out) {
        Ok(()) => info!(message = name, "serialized"),
        Err(e) => error!(message = name, cause = %e, "serialization failed"),
    }
}
