mod arbitrary;
