/// Filesystem adapters for reading scan exports
mod msf_xml_reader;

pub use msf_xml_reader::MetasploitXmlReader;
