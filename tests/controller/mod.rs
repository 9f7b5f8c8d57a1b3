mod contact;
mod login;
