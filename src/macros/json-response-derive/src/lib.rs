use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DeriveInput};

/// Derive a rocket `Responder` that renders the struct as a JSON body.
///
/// The generated impl refers to `Responder`, `Response`, `response`,
/// `Request` and `ContentType` unqualified; deriving files import those
/// from rocket themselves.
#[proc_macro_derive(JsonResponse)]
pub fn json_response_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = input.ident;

    let expanded = quote! {
        impl<'r> Responder<'r, 'static> for #name {
            fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
                let json = match serde_json::to_string(&self) {
                    Ok(json) => json,
                    Err(_) => return Err(rocket::http::Status::InternalServerError),
                };

                Response::build_from(json.respond_to(request)?)
                    .header(ContentType::JSON)
                    .ok()
            }
        }
    };

    TokenStream::from(expanded)
}
