mod user;
mod whitelist_question;
mod whitelist_request;
