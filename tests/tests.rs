mod form;
mod table;
