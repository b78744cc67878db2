pub mod envertech;
