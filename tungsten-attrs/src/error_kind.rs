use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, quote_spanned, ToTokens};
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    Expr,
    Fields,
    Ident,
    ItemStruct,
    Result,
    Token,
};

/// A single `tag = expr` pair inside the `error` attribute.
enum ErrorArg {
    Message(Expr),
    Labels(Expr),
    Help(Expr),
}

impl Parse for ErrorArg {
    fn parse(input: ParseStream) -> Result<Self> {
        let tag: Ident = input.parse()?;
        input.parse::<Token![=]>()?;

        match tag.to_string().as_str() {
            "message" => Ok(Self::Message(input.parse()?)),
            "labels" => Ok(Self::Labels(input.parse()?)),
            "help" => Ok(Self::Help(input.parse()?)),
            other => Err(syn::Error::new_spanned(&tag, format!("unknown tag `{}`", other))),
        }
    }
}

/// The contents of the `error` attribute.
#[derive(Default)]
pub struct ErrorArgs {
    pub message: Option<Expr>,
    pub labels: Option<Expr>,
    pub help: Option<Expr>,
}

impl Parse for ErrorArgs {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut args = ErrorArgs::default();
        for arg in Punctuated::<ErrorArg, Token![,]>::parse_terminated(input)? {
            let (slot, value) = match arg {
                ErrorArg::Message(expr) => (&mut args.message, expr),
                ErrorArg::Labels(expr) => (&mut args.labels, expr),
                ErrorArg::Help(expr) => (&mut args.help, expr),
            };
            if slot.is_some() {
                return Err(syn::Error::new_spanned(value, "tag given more than once"));
            }
            *slot = Some(value);
        }
        Ok(args)
    }
}

/// Creates a `let` expression that destructures the given `ident` into its named fields. Returns
/// a compile error if the fields are not named.
fn destructure_fields(ident: &Ident, fields: &Fields) -> TokenStream2 {
    match fields {
        Fields::Named(fields) => {
            let fields = fields.named.iter().map(|field| {
                let field_name = field.ident.as_ref();
                quote! { #field_name }
            });
            quote! { let #ident { #(#fields),* } = self; }
        },
        Fields::Unnamed(_) => quote_spanned! { ident.span() => compile_error!("`ErrorKind` cannot be derived for tuple structs") },
        Fields::Unit => quote! {},
    }
}

/// The target struct to derive [`ErrorKind`] for.
pub struct ErrorKindTarget {
    pub name: Ident,
    pub fields: Fields,
    pub error_args: ErrorArgs,
}

impl Parse for ErrorKindTarget {
    fn parse(input: ParseStream) -> Result<Self> {
        let item = input.parse::<ItemStruct>()?;
        let error_args = match item.attrs.iter().find(|attr| attr.path().is_ident("error")) {
            Some(attr) => attr.parse_args::<ErrorArgs>()?,
            None => ErrorArgs::default(),
        };

        Ok(ErrorKindTarget {
            name: item.ident,
            fields: item.fields,
            error_args,
        })
    }
}

impl ToTokens for ErrorKindTarget {
    fn to_tokens(&self, tokens: &mut TokenStream2) {
        let destructure_expr = destructure_fields(&self.name, &self.fields);
        let message = self.error_args.message
            .as_ref()
            .map(|e| quote! { #e })
            .unwrap_or_else(|| quote! { "an error occurred" });
        let labels = self.error_args.labels
            .as_ref()
            .map(|e| quote! { (#e).into_iter().map(|label| label.to_string()).collect::<Vec<String>>() })
            .unwrap_or_else(|| quote! { Vec::<String>::new() });
        let help = self.error_args.help.as_ref().map(|e| quote! { builder.set_help(#e); });

        tokens.extend(quote! {
            fn build_report<'a>(
                &self,
                src_id: &'a str,
                spans: &[std::ops::Range<usize>],
            ) -> ariadne::Report<(&'a str, std::ops::Range<usize>)> {
                #[allow(unused_variables)]
                #destructure_expr

                // errors raised outside the parser may not point at any source
                let offset = spans.first().map_or(0, |span| span.start);
                let label_strs: Vec<String> = #labels;
                let mut builder = ariadne::Report::build(ariadne::ReportKind::Error, src_id, offset)
                    .with_message(#message)
                    .with_labels(
                        label_strs
                            .into_iter()
                            .zip(spans.iter())
                            .map(|(label_str, span)| {
                                let mut label = ariadne::Label::new((src_id, span.clone()))
                                    .with_color(tungsten_error::EXPR);

                                if !label_str.is_empty() {
                                    label = label.with_message(label_str);
                                }

                                label
                            })
                            .collect::<Vec<_>>()
                    );

                #help
                builder.finish()
            }
        });
    }
}
