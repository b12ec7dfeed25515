/// HTTP Method.
///
/// This API follows the [RFC9110] methods and the PATCH method from [RFC5789].
///
/// Arbitrary method is not supported.
///
/// [RFC5789]: <https://www.rfc-editor.org/rfc/rfc5789>
/// [RFC9110]: <https://www.rfc-editor.org/rfc/rfc9110.html#name-methods>
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Method(u8);

macro_rules! methods {
    ($($id:ident = ($int:literal, $str:literal);)*) => {
        impl Method {
            $(
                #[doc = concat!("The `", $str, "` method.")]
                pub const $id: Self = Self($int);
            )*

            /// Returns string representation of the method, e.g: `"GET"`.
            #[inline]
            pub const fn as_str(&self) -> &'static str {
                match self.0 {
                    $($int => $str,)*
                    // SAFETY: Method value is privately constructed and immutable
                    _ => unsafe { std::hint::unreachable_unchecked() },
                }
            }
        }
    };
}

methods! {
    GET = (0, "GET");
    HEAD = (1, "HEAD");
    POST = (2, "POST");
    PUT = (3, "PUT");
    DELETE = (4, "DELETE");
    CONNECT = (5, "CONNECT");
    OPTIONS = (6, "OPTIONS");
    TRACE = (7, "TRACE");
    PATCH = (8, "PATCH");
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Debug for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
