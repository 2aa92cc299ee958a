use std::fmt;
use std::marker::PhantomData;

use http::Version;

use crate::body::Body;
use crate::protocol::{BasicFields, Fields};

/// Protocol version a message starts out with: HTTP/1.1 as `major * 10 + minor`.
pub const DEFAULT_VERSION: u32 = 11;

/// Status code a response starts out with.
pub const DEFAULT_STATUS: u16 = 200;

mod private {
    pub trait Sealed {}
}

/// Type-level direction of a message: [`Req`] or [`Res`].
pub trait Direction: private::Sealed {
    const IS_REQUEST: bool;
}

/// Request direction. Method and target live in the message's fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Req;

/// Response direction, carrying the status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Res {
    status: u16,
}

impl Res {
    pub fn new(status: u16) -> Self {
        Self { status }
    }

    pub fn status(&self) -> u16 {
        self.status
    }
}

impl Default for Res {
    fn default() -> Self {
        Self::new(DEFAULT_STATUS)
    }
}

impl private::Sealed for Req {}
impl private::Sealed for Res {}

impl Direction for Req {
    const IS_REQUEST: bool = true;
}

impl Direction for Res {
    const IS_REQUEST: bool = false;
}

/// An HTTP-like message whose body representation is chosen by `B`.
///
/// The message is composed of a direction tag `D`, a header container `F`
/// and the body strategy's storage, which it owns exclusively. Nothing is
/// validated here: version, status, method and target are stored as given.
pub struct Message<D, B, F = BasicFields>
where
    D: Direction,
    B: Body,
{
    direction: D,
    version: u32,
    fields: F,
    body: B::Storage,
    _body: PhantomData<fn() -> B>,
}

/// An HTTP-like request.
pub type Request<B, F = BasicFields> = Message<Req, B, F>;

/// An HTTP-like response.
pub type Response<B, F = BasicFields> = Message<Res, B, F>;

impl<D, B, F> Message<D, B, F>
where
    D: Direction + Default,
    B: Body,
    F: Default,
{
    /// Creates a message with default header values around `body`.
    pub fn new(body: B::Storage) -> Self {
        Self::from_parts(D::default(), DEFAULT_VERSION, F::default(), body)
    }
}

impl<D, B, F> Message<D, B, F>
where
    D: Direction,
    B: Body,
{
    pub fn from_parts(direction: D, version: u32, fields: F, body: B::Storage) -> Self {
        Self { direction, version, fields, body, _body: PhantomData }
    }

    pub fn into_parts(self) -> (D, u32, F, B::Storage) {
        (self.direction, self.version, self.fields, self.body)
    }

    #[inline]
    pub fn is_request(&self) -> bool {
        D::IS_REQUEST
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn set_version(&mut self, version: u32) {
        self.version = version;
    }

    /// Maps the integer version onto [`http::Version`], if it names one.
    pub fn http_version(&self) -> Option<Version> {
        match self.version {
            9 => Some(Version::HTTP_09),
            10 => Some(Version::HTTP_10),
            11 => Some(Version::HTTP_11),
            20 => Some(Version::HTTP_2),
            30 => Some(Version::HTTP_3),
            _ => None,
        }
    }

    pub fn fields(&self) -> &F {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut F {
        &mut self.fields
    }

    pub fn body(&self) -> &B::Storage {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut B::Storage {
        &mut self.body
    }

    pub fn into_body(self) -> B::Storage {
        self.body
    }

    /// Body size in bytes, when the body strategy knows it up front.
    pub fn content_length(&self) -> Option<u64> {
        B::content_length(&self.body)
    }
}

impl<B, F> Message<Req, B, F>
where
    B: Body,
    F: Fields,
{
    pub fn method(&self) -> &str {
        self.fields.method()
    }

    pub fn set_method(&mut self, method: &str) {
        self.fields.set_method(method);
    }

    pub fn target(&self) -> &str {
        self.fields.target()
    }

    pub fn set_target(&mut self, target: &str) {
        self.fields.set_target(target);
    }
}

impl<B, F> Message<Res, B, F>
where
    B: Body,
    F: Fields,
{
    pub fn status(&self) -> u16 {
        self.direction.status
    }

    pub fn set_status(&mut self, status: u16) {
        self.direction.status = status;
    }

    pub fn reason(&self) -> &str {
        self.fields.reason()
    }

    pub fn set_reason(&mut self, reason: &str) {
        self.fields.set_reason(reason);
    }
}

impl<D, B, F> Default for Message<D, B, F>
where
    D: Direction + Default,
    B: Body,
    B::Storage: Default,
    F: Default,
{
    fn default() -> Self {
        Self::new(Default::default())
    }
}

impl<D, B, F> Clone for Message<D, B, F>
where
    D: Direction + Clone,
    B: Body,
    B::Storage: Clone,
    F: Clone,
{
    fn clone(&self) -> Self {
        Self::from_parts(self.direction.clone(), self.version, self.fields.clone(), self.body.clone())
    }
}

impl<D, B, F> fmt::Debug for Message<D, B, F>
where
    D: Direction + fmt::Debug,
    B: Body,
    B::Storage: fmt::Debug,
    F: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Message")
            .field("direction", &self.direction)
            .field("version", &self.version)
            .field("fields", &self.fields)
            .field("body", &self.body)
            .finish()
    }
}
