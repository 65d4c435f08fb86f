mod cors;
mod health;
mod helpers;
mod logout;
mod signup;
