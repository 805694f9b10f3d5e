use serde::ser::{SerializeSeq, Serializer};
use std::io::Write;

macro_rules! impl_disp_methods {
    ($(($method:ident, $ty:ty)),+ $(,)?) => {$(
        fn $method(self, v: $ty) -> Result<Self::Ok, Self::Error> {
            write!(self.writer, "{v}").map_err(Error)
        }
    )+};
}

#[derive(Debug)]
pub(crate) struct Error(std::io::Error);
impl std::error::Error for Error {}
impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
impl serde::ser::Error for Error {
    fn custom<T: std::fmt::Display>(msg: T) -> Self {
        Self(std::io::Error::other(msg.to_string()))
    }
}

/// A TOML-like report writer.
///
/// Top-level structs are written as `key=value` lines, nested structs are
/// written inline as `{key=value, ...}`, sequences as `(a, b)`.
pub(crate) struct Logger<W: Write> {
    writer: W,
    prec: usize,
    depth: usize,
}

impl<W: Write> Logger<W> {
    pub(crate) fn new(writer: W) -> Self {
        Self { writer, prec: 4, depth: 0 }
    }

    /// Set the float precision.
    pub(crate) fn prec(self, prec: usize) -> Self {
        Self { prec, ..self }
    }

    pub(crate) fn title(&mut self, title: &str) -> std::io::Result<()> {
        writeln!(self.writer, "[{title}]")
    }

    /// Log a top-level value. Structs and maps become `key=value` lines.
    pub(crate) fn log<S: serde::Serialize + ?Sized>(&mut self, s: &S) -> std::io::Result<()> {
        self.depth = 0;
        s.serialize(&mut *self).map_err(|e| e.0)
    }

    /// Log a single `key=value` line.
    pub(crate) fn entry<S>(&mut self, key: &str, value: &S) -> std::io::Result<()>
    where
        S: serde::Serialize + ?Sized,
    {
        write!(self.writer, "{key}=")?;
        // Nested level, so structs are inline
        self.depth = 1;
        value.serialize(&mut *self).map_err(|e| e.0)?;
        self.depth = 0;
        writeln!(self.writer)
    }

    /// Write an empty line between sections.
    pub(crate) fn gap(&mut self) -> std::io::Result<()> {
        writeln!(self.writer)
    }

    pub(crate) fn flush(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }

    #[cfg(test)]
    pub(crate) fn into_inner(self) -> W {
        self.writer
    }

    fn open(&mut self) -> Result<bool, Error> {
        let nested = self.depth > 0;
        if nested {
            write!(self.writer, "{{").map_err(Error)?;
        }
        self.depth += 1;
        Ok(nested)
    }

    fn field<T>(&mut self, key: &dyn std::fmt::Display, first: bool, value: &T) -> Result<(), Error>
    where
        T: ?Sized + serde::Serialize,
    {
        if self.depth > 1 {
            if !first {
                write!(self.writer, ", ").map_err(Error)?;
            }
            write!(self.writer, "{key}=").map_err(Error)?;
            value.serialize(&mut *self)
        } else {
            write!(self.writer, "{key}=").map_err(Error)?;
            value.serialize(&mut *self)?;
            writeln!(self.writer).map_err(Error)
        }
    }

    fn close(&mut self, nested: bool) -> Result<(), Error> {
        self.depth -= 1;
        if nested {
            write!(self.writer, "}}").map_err(Error)?;
        }
        Ok(())
    }
}

impl<'a, W: Write> Serializer for &'a mut Logger<W> {
    type Ok = ();
    type Error = Error;

    type SerializeSeq = Seq<'a, W>;
    type SerializeTuple = Seq<'a, W>;
    type SerializeTupleStruct = Seq<'a, W>;
    type SerializeTupleVariant = Seq<'a, W>;
    type SerializeMap = Fields<'a, W>;
    type SerializeStruct = Fields<'a, W>;
    type SerializeStructVariant = Fields<'a, W>;

    impl_disp_methods!(
        (serialize_bool, bool),
        (serialize_i8, i8),
        (serialize_i16, i16),
        (serialize_i32, i32),
        (serialize_i64, i64),
        (serialize_u8, u8),
        (serialize_u16, u16),
        (serialize_u32, u32),
        (serialize_u64, u64),
        (serialize_char, char),
        (serialize_str, &str),
        (serialize_unit_struct, &'static str),
    );

    fn serialize_f32(self, v: f32) -> Result<Self::Ok, Self::Error> {
        self.serialize_f64(v as f64)
    }

    fn serialize_f64(self, v: f64) -> Result<Self::Ok, Self::Error> {
        let prec = self.prec;
        write!(self.writer, "{v:.prec$}").map_err(Error)
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Self::Ok, Self::Error> {
        let mut seq = self.serialize_seq(Some(v.len()))?;
        for b in v {
            seq.serialize_element(b)?;
        }
        seq.end()
    }

    fn serialize_none(self) -> Result<Self::Ok, Self::Error> {
        write!(self.writer, "none").map_err(Error)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Self::Ok, Self::Error>
    where
        T: ?Sized + serde::Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Self::Ok, Self::Error> {
        Ok(())
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Self::Ok, Self::Error> {
        write!(self.writer, "{variant}").map_err(Error)
    }

    fn serialize_newtype_struct<T>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<Self::Ok, Self::Error>
    where
        T: ?Sized + serde::Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Self::Ok, Self::Error>
    where
        T: ?Sized + serde::Serialize,
    {
        write!(self.writer, "{variant}(").map_err(Error)?;
        value.serialize(&mut *self)?;
        write!(self.writer, ")").map_err(Error)
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq, Self::Error> {
        write!(self.writer, "(").map_err(Error)?;
        Ok(Seq { logger: self, first: true })
    }

    fn serialize_tuple(self, len: usize) -> Result<Self::SerializeTuple, Self::Error> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleStruct, Self::Error> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleVariant, Self::Error> {
        write!(self.writer, "{variant}").map_err(Error)?;
        self.serialize_seq(Some(len))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap, Self::Error> {
        let nested = self.open()?;
        Ok(Fields { logger: self, nested, first: true, key: String::new() })
    }

    fn serialize_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<Self::SerializeStruct, Self::Error> {
        self.serialize_map(Some(len))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<Self::SerializeStructVariant, Self::Error> {
        write!(self.writer, "{variant}").map_err(Error)?;
        self.serialize_map(Some(len))
    }
}

pub(crate) struct Seq<'a, W: Write> {
    logger: &'a mut Logger<W>,
    first: bool,
}

macro_rules! impl_ser_seq {
    ($(($ty:ident, $method:ident)),+ $(,)?) => {$(
        impl<W: Write> serde::ser::$ty for Seq<'_, W> {
            type Ok = ();
            type Error = Error;

            fn $method<T>(&mut self, value: &T) -> Result<Self::Ok, Self::Error>
            where
                T: ?Sized + serde::Serialize,
            {
                if !std::mem::replace(&mut self.first, false) {
                    write!(self.logger.writer, ", ").map_err(Error)?;
                }
                self.logger.depth += 1;
                let res = value.serialize(&mut *self.logger);
                self.logger.depth -= 1;
                res
            }

            fn end(self) -> Result<Self::Ok, Self::Error> {
                write!(self.logger.writer, ")").map_err(Error)
            }
        }
    )+};
}

impl_ser_seq!(
    (SerializeSeq, serialize_element),
    (SerializeTuple, serialize_element),
    (SerializeTupleStruct, serialize_field),
    (SerializeTupleVariant, serialize_field),
);

pub(crate) struct Fields<'a, W: Write> {
    logger: &'a mut Logger<W>,
    nested: bool,
    first: bool,
    key: String,
}

impl<W: Write> Fields<'_, W> {
    fn push<T>(&mut self, key: &dyn std::fmt::Display, value: &T) -> Result<(), Error>
    where
        T: ?Sized + serde::Serialize,
    {
        let first = std::mem::replace(&mut self.first, false);
        self.logger.field(key, first, value)
    }

    fn finish(self) -> Result<(), Error> {
        self.logger.close(self.nested)
    }
}

impl<W: Write> serde::ser::SerializeMap for Fields<'_, W> {
    type Ok = ();
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<Self::Ok, Self::Error>
    where
        T: ?Sized + serde::Serialize,
    {
        let mut buf = Logger::new(Vec::new()).prec(self.logger.prec);
        key.serialize(&mut buf)?;
        self.key = String::from_utf8_lossy(&buf.writer).into_owned();
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<Self::Ok, Self::Error>
    where
        T: ?Sized + serde::Serialize,
    {
        let key = std::mem::take(&mut self.key);
        self.push(&key, value)
    }

    fn end(self) -> Result<Self::Ok, Self::Error> {
        self.finish()
    }
}

macro_rules! impl_ser_fields {
    ($($ty:ident),+ $(,)?) => {$(
        impl<W: Write> serde::ser::$ty for Fields<'_, W> {
            type Ok = ();
            type Error = Error;

            fn serialize_field<T>(
                &mut self,
                key: &'static str,
                value: &T,
            ) -> Result<Self::Ok, Self::Error>
            where
                T: ?Sized + serde::Serialize,
            {
                self.push(&key, value)
            }

            fn end(self) -> Result<Self::Ok, Self::Error> {
                self.finish()
            }
        }
    )+};
}

impl_ser_fields!(SerializeStruct, SerializeStructVariant);
